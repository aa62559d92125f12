use thiserror::Error;

/// Failures of the token subsystem.
///
/// `InvalidKeySize`, `RandomGeneration` and `Encryption` are server faults.
/// `InvalidToken` and `Expired` are rejections of a single credential and
/// must reach the client as the same unauthorized outcome.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("invalid key size: expected {expected} bytes, got {actual}")]
    InvalidKeySize { expected: usize, actual: usize },

    #[error("failed to generate random bytes: {0}")]
    RandomGeneration(String),

    #[error("token duration is out of range")]
    InvalidDuration,

    #[error("failed to encrypt token: {0}")]
    Encryption(String),

    #[error("token is invalid")]
    InvalidToken,

    #[error("token has expired")]
    Expired,
}

impl TokenError {
    /// True when the error rejects the presented credential rather than
    /// signalling a fault on our side.
    pub fn is_rejection(&self) -> bool {
        matches!(self, TokenError::InvalidToken | TokenError::Expired)
    }
}
