// Business logic between handlers and the store
pub mod user_service;
