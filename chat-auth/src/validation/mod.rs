mod password;
mod username;

pub use password::*;
pub use username::*;
