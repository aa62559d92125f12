use std::collections::HashMap;

use chrono::Utc;

use super::password_hasher::{verify_dummy_password, verify_password};
use crate::domain::{Password, User, UserStore, UserStoreError, Username};

#[derive(Default)]
pub struct HashmapUserStore {
    users: HashMap<Username, User>,
    last_id: u64,
}

impl HashmapUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl UserStore for HashmapUserStore {
    async fn add_user(
        &mut self,
        username: Username,
        password_hash: String,
    ) -> Result<User, UserStoreError> {
        if self.users.contains_key(&username) {
            return Err(UserStoreError::UserAlreadyExists);
        }

        self.last_id += 1;
        let user = User::new(self.last_id, username.clone(), password_hash, Utc::now());
        self.users.insert(username, user.clone());
        Ok(user)
    }

    async fn get_user(&self, username: &Username) -> Result<User, UserStoreError> {
        self.users
            .get(username)
            .cloned()
            .ok_or(UserStoreError::UserNotFound)
    }

    async fn validate_user(
        &self,
        username: &Username,
        password: &Password,
    ) -> Result<User, UserStoreError> {
        let Some(user) = self.users.get(username) else {
            verify_dummy_password(password).await?;
            return Err(UserStoreError::UserNotFound);
        };

        match verify_password(password, &user.password_hash).await? {
            true => Ok(user.clone()),
            false => Err(UserStoreError::InvalidCredentials),
        }
    }
}
