pub mod http;

// re-export items from sub-modules
pub use http::{login, me, register};
