pub mod api;
pub mod config;
pub mod middleware;
pub mod models;
pub mod server;
pub mod services;
pub mod shutdown;
pub mod store;
pub mod utils;
