use std::sync::Arc;

use crate::{
    auth::{AuthService, DemoAuth},
    catalog::Catalog,
    chat::ChatHub,
    config::Config,
    error::AuthError,
};

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub auth: Arc<dyn AuthService>,
    pub chats: ChatHub,
    pub config: Config,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self, AuthError> {
        let auth = DemoAuth::seeded(&config.demo_password)?;
        Ok(Self {
            catalog: Arc::new(Catalog::in_memory()),
            auth: Arc::new(auth),
            chats: ChatHub::new(config.chat_reply_delay),
            config,
        })
    }
}
