pub mod api;
pub mod models;
pub mod presenter;
pub mod server;
