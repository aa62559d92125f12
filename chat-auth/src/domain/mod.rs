pub mod auth_response;
pub mod data_stores;
pub mod identity;
pub mod issued_token;
pub mod login_request;
pub mod password;
pub mod payload;
pub mod register_request;
pub mod token_footer;
pub mod token_maker;
pub mod user;
pub mod username;

pub use auth_response::*;
pub use data_stores::*;
pub use identity::*;
pub use issued_token::*;
pub use login_request::*;
pub use password::*;
pub use payload::*;
pub use register_request::*;
pub use token_footer::*;
pub use token_maker::*;
pub use user::*;
pub use username::*;
