use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateCertificatePayload {
    #[validate(length(min = 1))]
    pub title: String,
    pub authority: Option<String>,
    pub file_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreatePortfolioPayload {
    #[validate(length(min = 1))]
    pub title: String,
    pub description: Option<String>,
    pub link: Option<String>,
}
