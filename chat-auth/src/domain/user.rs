use chrono::{DateTime, Utc};

use super::{Identity, Username};

#[derive(PartialEq, Debug, Clone)]
pub struct User {
    pub id: u64,
    pub username: Username,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn new(
        id: u64,
        username: Username,
        password_hash: String,
        created_at: DateTime<Utc>,
    ) -> Self {
        User {
            id,
            username,
            password_hash,
            created_at,
        }
    }

    pub fn identity(&self) -> Identity {
        Identity::new(self.id, self.username.as_ref()).with_created_at(self.created_at)
    }
}
