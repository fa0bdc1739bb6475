pub mod crypto;
pub mod pagination;
pub mod permissions;
pub mod token;
