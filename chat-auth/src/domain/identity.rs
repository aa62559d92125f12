use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The user reference carried inside a token.
///
/// Copied by value into every payload so a token can be verified without a
/// user lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: u64,
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Identity {
    pub fn new(id: u64, username: impl Into<String>) -> Self {
        Identity {
            id,
            username: username.into(),
            created_at: None,
        }
    }

    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }
}
