use log::{error, info};

use crate::app_state::AppState;
use crate::domain::{IssuedToken, Password, User, UserStoreError, Username};
use crate::errors::{LoginError, RegisterError, TokenError};
use crate::services::password_hasher::hash_password;

pub struct AuthService;

impl AuthService {
    /// Hashes the password before taking the store's write lock, so logins
    /// are not held up behind a registration.
    pub async fn register(
        state: &AppState,
        username: Username,
        password: Password,
    ) -> Result<User, RegisterError> {
        let taken = || RegisterError::UsernameTaken(username.as_ref().to_string());

        match state.user_store.read().await.get_user(&username).await {
            Ok(_) => return Err(taken()),
            Err(UserStoreError::UserNotFound) => {}
            Err(e) => {
                error!("failed to look up user: {e}");
                return Err(RegisterError::InternalServerError);
            }
        }

        let password_hash = hash_password(&password).await.map_err(|e| {
            error!("failed to hash password: {e}");
            RegisterError::InternalServerError
        })?;

        // The name may have been claimed while hashing; the store checks again.
        let result = state
            .user_store
            .write()
            .await
            .add_user(username.clone(), password_hash)
            .await;

        result.map_err(|e| match e {
            UserStoreError::UserAlreadyExists => taken(),
            e => {
                error!("failed to register user: {e}");
                RegisterError::InternalServerError
            }
        })
    }

    pub async fn login(
        state: &AppState,
        username: Username,
        password: Password,
    ) -> Result<User, LoginError> {
        match state
            .user_store
            .read()
            .await
            .validate_user(&username, &password)
            .await
        {
            Ok(user) => Ok(user),
            // Unknown user and wrong password look the same to the caller.
            Err(UserStoreError::UserNotFound | UserStoreError::InvalidCredentials) => {
                info!("rejected login for {}", username.as_ref());
                Err(LoginError::InvalidCredentials)
            }
            Err(e) => {
                error!("failed to validate user: {e}");
                Err(LoginError::InternalServerError)
            }
        }
    }

    /// Issue an access token for `user` with the configured lifetime.
    pub fn issue_token(state: &AppState, user: &User) -> Result<IssuedToken, TokenError> {
        state
            .token_maker
            .create_token(&user.identity(), state.config.access_token_ttl())
            .map_err(|e| {
                error!("failed to issue access token for user {}: {e}", user.id);
                e
            })
    }
}
