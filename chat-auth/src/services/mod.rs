pub mod auth;
pub mod hashmap_user_store;
pub mod paseto_maker;
pub mod password_hasher;
pub mod token_codec;

pub use auth::*;
pub use hashmap_user_store::*;
pub use paseto_maker::*;
pub use token_codec::*;
