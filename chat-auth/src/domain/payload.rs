use chrono::{DateTime, Duration, Utc};
use rand::rngs::OsRng;
use rand::TryRngCore;
use serde::{Deserialize, Serialize};
use uuid::{Builder, Uuid};

use super::Identity;
use crate::errors::TokenError;

/// Data bound inside every access token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payload {
    pub correlation_id: Uuid,
    pub identity: Identity,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl Payload {
    /// Build a payload for `identity` valid for `duration` from now.
    ///
    /// A zero or negative duration yields a payload that is already expired.
    pub fn new(identity: &Identity, duration: Duration) -> Result<Self, TokenError> {
        Self::new_at(identity, duration, Utc::now())
    }

    pub fn new_at(
        identity: &Identity,
        duration: Duration,
        now: DateTime<Utc>,
    ) -> Result<Self, TokenError> {
        let correlation_id = random_correlation_id()?;
        let expires_at = now
            .checked_add_signed(duration)
            .ok_or(TokenError::InvalidDuration)?;

        Ok(Payload {
            correlation_id,
            identity: identity.clone(),
            issued_at: now,
            expires_at,
        })
    }

    pub fn validate(&self) -> Result<(), TokenError> {
        self.validate_at(Utc::now())
    }

    // Valid strictly before expires_at.
    pub fn validate_at(&self, now: DateTime<Utc>) -> Result<(), TokenError> {
        if now >= self.expires_at {
            return Err(TokenError::Expired);
        }
        Ok(())
    }
}

fn random_correlation_id() -> Result<Uuid, TokenError> {
    let mut bytes = [0u8; 16];
    OsRng
        .try_fill_bytes(&mut bytes)
        .map_err(|e| TokenError::RandomGeneration(e.to_string()))?;
    Ok(Builder::from_random_bytes(bytes).into_uuid())
}
