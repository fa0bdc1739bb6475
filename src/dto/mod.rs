pub mod auth_dto;
pub mod public_dto;
pub mod ticket_dto;
pub mod user_dto;
