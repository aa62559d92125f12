use chrono::{DateTime, Duration, Utc};

use super::token_codec::TokenCodec;
use crate::domain::{Identity, IssuedToken, Payload, TokenFooter, TokenMaker};
use crate::errors::TokenError;

/// Issues and verifies local (symmetric) access tokens.
///
/// Typical lifecycle:
/// 1. Built once at startup from the configured key; a key of the wrong
///    size aborts startup.
/// 2. `create_token` after a successful credential check.
/// 3. `verify_token` on every protected request.
///
/// Tokens are not tracked anywhere: a token stays valid until its
/// `expires_at`, and there is no revocation.
#[derive(Debug, Clone)]
pub struct PasetoMaker {
    codec: TokenCodec,
    footer: TokenFooter,
}

impl PasetoMaker {
    pub fn new(key: &[u8], issuer: impl Into<String>) -> Result<Self, TokenError> {
        Ok(Self {
            codec: TokenCodec::new(key)?,
            footer: TokenFooter::new(issuer),
        })
    }
}

impl TokenMaker for PasetoMaker {
    fn create_token(
        &self,
        identity: &Identity,
        duration: Duration,
    ) -> Result<IssuedToken, TokenError> {
        let payload = Payload::new(identity, duration)?;
        let token = self.codec.encrypt(&payload, &self.footer)?;

        Ok(IssuedToken { token, payload })
    }

    fn verify_token_at(&self, token: &str, now: DateTime<Utc>) -> Result<Payload, TokenError> {
        // Decrypt first: nothing in an unauthenticated payload is trusted.
        // A token minted under another issuer fails here too.
        let payload = self.codec.decrypt(token, &self.footer)?;

        payload.validate_at(now)?;
        Ok(payload)
    }
}
