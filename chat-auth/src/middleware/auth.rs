//! Bearer authentication at the request boundary.
//!
//! `require_auth` resolves the `Authorization` header to an [`Identity`] and
//! attaches it to the request as [`AuthUser`]. Handlers behind it take
//! `Extension<AuthUser>`; nothing downstream re-reads the header.
use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use log::{debug, error, info};

use crate::app_state::AppState;
use crate::domain::{Identity, TokenMaker};
use crate::errors::AuthError;

const BEARER_SCHEME: &str = "Bearer";

/// The caller of the current request, as recovered from its access token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthUser(pub Identity);

/// Extract the token from an `Authorization: Bearer <token>` value.
///
/// Anything else (missing header, another scheme, no token, extra
/// whitespace-separated parts) is `MissingCredentials`.
pub fn parse_bearer(header: Option<&str>) -> Result<&str, AuthError> {
    let value = header.ok_or(AuthError::MissingCredentials)?;
    let (scheme, token) = value
        .split_once(' ')
        .ok_or(AuthError::MissingCredentials)?;

    if scheme != BEARER_SCHEME || token.is_empty() || token.contains(char::is_whitespace) {
        return Err(AuthError::MissingCredentials);
    }
    Ok(token)
}

/// Resolve a raw `Authorization` header value to the identity it carries.
///
/// The header shape is checked before any cryptographic work. Every token
/// failure maps to the same `Unauthorized`; the specific cause only goes to
/// the log.
pub fn verify_authorization_header(
    token_maker: &dyn TokenMaker,
    header: Option<&str>,
) -> Result<Identity, AuthError> {
    let token = parse_bearer(header).map_err(|e| {
        debug!("rejecting request: missing or malformed bearer credential");
        e
    })?;

    match token_maker.verify_token(token) {
        Ok(payload) => Ok(payload.identity),
        Err(e) if e.is_rejection() => {
            info!("rejecting request: {e}");
            Err(AuthError::Unauthorized)
        }
        Err(e) => {
            error!("token verification failed: {e}");
            Err(AuthError::InternalServerError)
        }
    }
}

/// Axum middleware guarding protected routes.
pub async fn require_auth(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AuthError> {
    let identity = {
        let header = req
            .headers()
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok());
        verify_authorization_header(state.token_maker.as_ref(), header)?
    };

    req.extensions_mut().insert(AuthUser(identity));
    Ok(next.run(req).await)
}
