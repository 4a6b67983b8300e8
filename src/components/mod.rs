pub mod booking;
pub mod chat;
pub mod service;
pub mod ui;
pub mod worker;
