use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::{TokenMaker, UserStore};
use crate::utils::Config;

// Using type aliases to improve readability!
pub type UserStoreType = Arc<RwLock<dyn UserStore>>;
pub type TokenMakerType = Arc<dyn TokenMaker>;
pub type ConfigType = Arc<Config>;

#[derive(Clone)]
pub struct AppState {
    pub user_store: UserStoreType,
    pub token_maker: TokenMakerType,
    pub config: ConfigType,
}

impl AppState {
    pub fn new(user_store: UserStoreType, token_maker: TokenMakerType, config: ConfigType) -> Self {
        Self {
            user_store,
            token_maker,
            config,
        }
    }
}
