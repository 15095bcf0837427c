use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::user::{Role, User, VerifyStatus};

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SignupPayload {
    #[validate(length(min = 3, max = 30))]
    pub full_name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 8, max = 64))]
    pub password: String,
    pub role: Option<Role>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginPayload {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateMePayload {
    pub full_name: Option<String>,
    pub profile_pic: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyPayload {
    pub verify_status: VerifyStatus,
}

/// Public projection of a user record. The password hash never leaves the
/// model layer, but this keeps responses down to the fields the pages use.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub full_name: String,
    pub email: String,
    pub role: Role,
    pub profile_pic: Option<String>,
    pub verify_status: VerifyStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub status: String,
    pub token: String,
    pub data: AuthData,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthData {
    pub user: UserResponse,
}

impl From<User> for UserResponse {
    fn from(value: User) -> Self {
        Self {
            id: value.id,
            full_name: value.full_name,
            email: value.email,
            role: value.role,
            profile_pic: value.profile_pic,
            verify_status: value.verify_status,
            created_at: value.created_at,
        }
    }
}

impl AuthResponse {
    pub fn new(token: String, user: User) -> Self {
        Self {
            status: "success".to_string(),
            token,
            data: AuthData { user: user.into() },
        }
    }
}
