use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Identity;

/// Body returned by register and login.
#[derive(Deserialize, Serialize, Debug, PartialEq)]
pub struct AuthResponse {
    pub user: Identity,
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

#[derive(Deserialize, Serialize, Debug, PartialEq)]
pub struct UserResponse {
    pub user: Identity,
}
