use chrono::{DateTime, Duration, Utc};

use super::{Identity, IssuedToken, Payload};
use crate::errors::TokenError;

/// Issues and verifies access tokens.
///
/// Implementations hold no mutable state, so a single instance is shared by
/// every request.
pub trait TokenMaker: Send + Sync {
    fn create_token(&self, identity: &Identity, duration: Duration)
        -> Result<IssuedToken, TokenError>;

    /// Decrypt and authenticate `token`, then check it has not expired at `now`.
    fn verify_token_at(&self, token: &str, now: DateTime<Utc>) -> Result<Payload, TokenError>;

    fn verify_token(&self, token: &str) -> Result<Payload, TokenError> {
        self.verify_token_at(token, Utc::now())
    }
}
