use serde::{Deserialize, Serialize};

/// Non-secret metadata attached to a token.
///
/// Travels in the clear but is bound to the authentication tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TokenFooter {
    pub issuer: String,
}

impl TokenFooter {
    pub fn new(issuer: impl Into<String>) -> Self {
        TokenFooter {
            issuer: issuer.into(),
        }
    }
}
