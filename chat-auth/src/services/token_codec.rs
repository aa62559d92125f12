//! PASETO `v4.local` envelope for access tokens.
//!
//! Wire form: `v4.local.<body>.<footer>` where `body` carries the sealed
//! JSON of a [`Payload`] and `footer` is the base64url JSON of a
//! [`TokenFooter`]. Sealing and opening are done by `rusty_paseto`; the
//! footer is authenticated along with the body.
//!
//! Every decoding failure is reported as [`TokenError::InvalidToken`]: a
//! caller cannot tell a corrupted token from a forged one or from one sealed
//! under another key.
use std::fmt;

use base64::{engine::general_purpose::URL_SAFE_NO_PAD as B64, Engine};
use rusty_paseto::core::{
    Footer, Key, Local, Paseto, PasetoNonce, PasetoSymmetricKey, Payload as PasetoPayload, V4,
};

use crate::domain::{Payload, TokenFooter};
use crate::errors::TokenError;

pub const KEY_SIZE: usize = 32;
const HEADER: &str = "v4.local.";

#[derive(Clone)]
pub struct TokenCodec {
    key: [u8; KEY_SIZE],
}

impl fmt::Debug for TokenCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenCodec")
            .field("key", &"[redacted]")
            .finish()
    }
}

impl TokenCodec {
    /// Build a codec over `key`, which must be exactly [`KEY_SIZE`] bytes.
    pub fn new(key: &[u8]) -> Result<Self, TokenError> {
        let key = <[u8; KEY_SIZE]>::try_from(key).map_err(|_| TokenError::InvalidKeySize {
            expected: KEY_SIZE,
            actual: key.len(),
        })?;

        Ok(Self { key })
    }

    fn symmetric_key(&self) -> PasetoSymmetricKey<V4, Local> {
        PasetoSymmetricKey::<V4, Local>::from(Key::<KEY_SIZE>::from(self.key))
    }

    pub fn encrypt(&self, payload: &Payload, footer: &TokenFooter) -> Result<String, TokenError> {
        let plaintext =
            serde_json::to_string(payload).map_err(|e| TokenError::Encryption(e.to_string()))?;
        let footer =
            serde_json::to_string(footer).map_err(|e| TokenError::Encryption(e.to_string()))?;

        let nonce = Key::<32>::try_new_random()
            .map_err(|e| TokenError::RandomGeneration(format!("nonce generation failed: {e}")))?;
        let nonce = PasetoNonce::<V4, Local>::from(&nonce);

        Paseto::<V4, Local>::default()
            .set_payload(PasetoPayload::from(plaintext.as_str()))
            .set_footer(Footer::from(footer.as_str()))
            .try_encrypt(&self.symmetric_key(), &nonce)
            .map_err(|e| TokenError::Encryption(e.to_string()))
    }

    /// Open `token`, which must carry exactly `footer`.
    ///
    /// Expiry is not looked at here.
    pub fn decrypt(&self, token: &str, footer: &TokenFooter) -> Result<Payload, TokenError> {
        if !is_canonical(token) {
            return Err(TokenError::InvalidToken);
        }

        let footer = serde_json::to_string(footer).map_err(|_| TokenError::InvalidToken)?;
        let plaintext = Paseto::<V4, Local>::try_decrypt(
            token,
            &self.symmetric_key(),
            Footer::from(footer.as_str()),
            None,
        )
        .map_err(|_| TokenError::InvalidToken)?;

        // Only authenticated bytes are parsed here.
        serde_json::from_str(&plaintext).map_err(|_| TokenError::InvalidToken)
    }
}

// Exactly `v4.local.<body>.<footer>`, both segments strict unpadded base64url.
fn is_canonical(token: &str) -> bool {
    let Some(rest) = token.strip_prefix(HEADER) else {
        return false;
    };

    let segments: Vec<&str> = rest.split('.').collect();
    segments.len() == 2
        && segments
            .iter()
            .all(|segment| !segment.is_empty() && B64.decode(segment).is_ok())
}
