use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use crate::app_state::AppState;
use crate::domain::{AuthResponse, LoginRequestBody, Password, Username};
use crate::errors::LoginError;
use crate::services::AuthService;

pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequestBody>,
) -> Result<impl IntoResponse, LoginError> {
    let username = Username::parse(request.username).or(Err(LoginError::InvalidUsername))?;
    let password = Password::parse(request.password).or(Err(LoginError::InvalidPassword))?;

    let user = AuthService::login(&state, username, password).await?;
    let issued =
        AuthService::issue_token(&state, &user).map_err(|_| LoginError::InternalServerError)?;

    Ok((
        StatusCode::OK,
        Json(AuthResponse {
            user: user.identity(),
            token: issued.token,
            expires_at: issued.payload.expires_at,
        }),
    ))
}
