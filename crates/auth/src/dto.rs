use super::*;
use cod_core::Unique;
use serde::Deserialize;
use serde::Serialize;

#[derive(Deserialize)]
pub struct SigninRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub student_id: String,
    pub phone: String,
    pub department: String,
}

/// Limited profile update: only username and phone may change.
#[derive(Default, Deserialize)]
pub struct UpdateLimitedRequest {
    pub username: Option<String>,
    pub phone: Option<String>,
}

#[derive(Serialize)]
pub struct ProfileResponse {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub student_id: String,
    pub department: String,
    pub phone: String,
    pub verified: bool,
    pub roles: Vec<String>,
    /// Raw token value, kept in the signin body for client compatibility.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

impl ProfileResponse {
    pub fn new(account: &Account) -> Self {
        Self::with_token(account, None)
    }
    pub fn with_token(account: &Account, token: Option<String>) -> Self {
        Self {
            id: account.id().inner(),
            username: account.username().to_string(),
            email: account.email().to_string(),
            student_id: account.student_id().to_string(),
            department: account.department().to_string(),
            phone: account.phone().to_string(),
            verified: account.verified(),
            roles: account.authorities(),
            token,
        }
    }
}

#[derive(Serialize)]
pub struct MessageResponse {
    pub message: String,
}
