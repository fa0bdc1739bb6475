use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateRepairRequestPayload {
    #[validate(length(min = 1))]
    pub title: String,
    #[validate(length(min = 1))]
    pub description: String,
    #[validate(length(min = 1))]
    pub client_full_name: String,
    #[validate(email)]
    pub client_email: String,
    #[validate(length(min = 1))]
    pub client_phone: String,
    pub client_address: Option<String>,
}
