use axum::{http::StatusCode, response::IntoResponse};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RegisterError {
    #[error("username must be 3 to 32 characters of letters, digits, '_', '-' or '.'")]
    InvalidUsername,

    #[error("password must be at least 8 characters long, contain at least one uppercase letter and one special character.")]
    InvalidPassword,

    #[error("Username {0} has already been taken.")]
    UsernameTaken(String),

    #[error("Something went wrong, please try again later.")]
    InternalServerError,
}

impl IntoResponse for RegisterError {
    fn into_response(self) -> axum::response::Response {
        let status = match self {
            RegisterError::InvalidUsername => StatusCode::UNPROCESSABLE_ENTITY,
            RegisterError::InvalidPassword => StatusCode::UNPROCESSABLE_ENTITY,
            RegisterError::UsernameTaken(_) => StatusCode::CONFLICT,
            RegisterError::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, self.to_string()).into_response()
    }
}
