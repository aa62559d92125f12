mod auth;
mod login;
mod register;
mod token;

pub use auth::*;
pub use login::*;
pub use register::*;
pub use token::*;
