use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum UserStoreError {
    #[error("user already exists")]
    UserAlreadyExists,
    #[error("user not found")]
    UserNotFound,
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("unexpected error")]
    UnexpectedError,
}
