pub mod account;
pub mod booking;
pub mod chat;
pub mod customer;
pub mod public;
pub mod worker;

use actix_web::web;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.configure(public::configure)
        .configure(booking::configure)
        .configure(chat::configure)
        .configure(customer::configure)
        .configure(worker::configure)
        .configure(account::configure);
}
