mod auth;
mod catalog;
mod chat;
mod components;
mod config;
mod error;
mod i18n;
mod icons;
mod layouts;
mod models;
mod routes;
mod seed;
mod session;
mod state;
mod templates;

use actix_files::Files;
use actix_web::{middleware, web, App, HttpServer};

use crate::{config::Config, state::AppState};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(err) = run().await {
        eprintln!("Startup error: {err}");
        std::process::exit(1);
    }
    Ok(())
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env()?;
    let state = AppState::new(config.clone())?;
    state.chats.spawn_sweeper(config.chat_idle_timeout);

    let address = config.address();
    log::info!(
        "Starting Hunarmand on http://{address} (default language {})",
        config.default_language.code()
    );

    let static_dir = config.static_dir.clone();
    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(middleware::from_fn(i18n::language_provider))
            .wrap(middleware::from_fn(session::visitor_session))
            .wrap(middleware::Logger::default())
            .service(Files::new("/static", &static_dir).prefer_utf8(true))
            .configure(routes::configure)
    })
    .bind(address)?
    .run()
    .await?;

    Ok(())
}
