use argon2::{
    password_hash::{rand_core::OsRng, SaltString},
    Algorithm, Argon2, Params, PasswordHash, PasswordHasher, PasswordVerifier, Version,
};
use once_cell::sync::Lazy;

use crate::domain::{Password, UserStoreError};

// Checked against when the username is unknown, so that a miss costs the
// same argon2 work as a wrong password.
static DUMMY_PASSWORD_HASH: Lazy<Option<String>> =
    Lazy::new(|| hash_blocking("chat-auth dummy password").ok());

fn argon2() -> Result<Argon2<'static>, UserStoreError> {
    let params = Params::new(15000, 2, 1, None).map_err(|_| UserStoreError::UnexpectedError)?;
    Ok(Argon2::new(Algorithm::Argon2id, Version::V0x13, params))
}

fn hash_blocking(password: &str) -> Result<String, UserStoreError> {
    let salt = SaltString::generate(&mut OsRng);
    argon2()?
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|_| UserStoreError::UnexpectedError)
}

fn verify_blocking(password: &str, hash: &str) -> Result<bool, UserStoreError> {
    let parsed_hash = PasswordHash::new(hash).map_err(|_| UserStoreError::UnexpectedError)?;
    Ok(argon2()?
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}

// Hashing is CPU bound, keep it off the async workers.
pub async fn hash_password(password: &Password) -> Result<String, UserStoreError> {
    let password = password.as_ref().to_owned();
    tokio::task::spawn_blocking(move || hash_blocking(&password))
        .await
        .map_err(|_| UserStoreError::UnexpectedError)?
}

pub async fn verify_password(password: &Password, hash: &str) -> Result<bool, UserStoreError> {
    let password = password.as_ref().to_owned();
    let hash = hash.to_owned();
    tokio::task::spawn_blocking(move || verify_blocking(&password, &hash))
        .await
        .map_err(|_| UserStoreError::UnexpectedError)?
}

/// Run a verification that always fails, at the cost of a real one.
pub async fn verify_dummy_password(password: &Password) -> Result<(), UserStoreError> {
    let password = password.as_ref().to_owned();
    tokio::task::spawn_blocking(move || -> Result<(), UserStoreError> {
        let hash = DUMMY_PASSWORD_HASH
            .as_deref()
            .ok_or(UserStoreError::UnexpectedError)?;
        verify_blocking(&password, hash)?;
        Ok(())
    })
    .await
    .map_err(|_| UserStoreError::UnexpectedError)?
}
