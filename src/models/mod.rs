pub mod client;
pub mod ticket;
pub mod user;
