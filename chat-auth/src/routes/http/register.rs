use axum::extract::State;
use axum::{http::StatusCode, response::IntoResponse, Json};

use crate::app_state::AppState;
use crate::domain::{AuthResponse, Password, RegisterRequestBody, Username};
use crate::errors::RegisterError;
use crate::services::AuthService;

pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequestBody>,
) -> Result<impl IntoResponse, RegisterError> {
    let username = Username::parse(request.username).or(Err(RegisterError::InvalidUsername))?;
    let password = Password::parse(request.password).or(Err(RegisterError::InvalidPassword))?;

    let user = AuthService::register(&state, username, password).await?;
    let issued =
        AuthService::issue_token(&state, &user).map_err(|_| RegisterError::InternalServerError)?;

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            user: user.identity(),
            token: issued.token,
            expires_at: issued.payload.expires_at,
        }),
    ))
}
