use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Payload for creating a new account.
///
/// `role` accepts `student`, `teacher` or `company`; admin accounts are only
/// created by the startup bootstrap.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RegisterDto {
    pub email: String,
    pub name: String,
    pub password: String,
    pub role: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LoginDto {
    pub email: String,
    pub password: String,
}
