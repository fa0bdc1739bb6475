pub mod auth_service;
pub mod client_service;
pub mod ticket_service;
pub mod user_service;
