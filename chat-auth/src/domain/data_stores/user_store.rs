use crate::domain::{Password, User, Username};
use super::UserStoreError;

#[async_trait::async_trait]
pub trait UserStore: Send + Sync {
    /// Persist a new user from an already computed password hash. Ids start at 1.
    async fn add_user(
        &mut self,
        username: Username,
        password_hash: String,
    ) -> Result<User, UserStoreError>;
    async fn get_user(&self, username: &Username) -> Result<User, UserStoreError>;
    async fn validate_user(
        &self,
        username: &Username,
        password: &Password,
    ) -> Result<User, UserStoreError>;
}
