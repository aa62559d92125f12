use axum::{Extension, Json};

use crate::domain::UserResponse;
use crate::middleware::AuthUser;

// The identity comes from the token alone; no user lookup.
pub async fn me(Extension(AuthUser(identity)): Extension<AuthUser>) -> Json<UserResponse> {
    Json(UserResponse { user: identity })
}
