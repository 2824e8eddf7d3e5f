use serde::{Deserialize, Serialize};

/// Request body for signup and login. Fields default to empty so a missing
/// field reaches validation (400) instead of a serde rejection.
#[derive(Debug, Deserialize)]
pub struct AuthRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Response returned after signup or login.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub email: String,
}
