pub mod env {
    pub const PASETO_KEY_ENV_VAR: &str = "PASETO_KEY";
    pub const ACCESS_TOKEN_TTL_SECONDS_ENV_VAR: &str = "ACCESS_TOKEN_TTL_SECONDS";
    pub const TOKEN_ISSUER_ENV_VAR: &str = "TOKEN_ISSUER";
    pub const APP_ADDRESS_ENV_VAR: &str = "APP_ADDRESS";
}

// 30 minutes
pub const DEFAULT_ACCESS_TOKEN_TTL_SECONDS: i64 = 1800;
pub const DEFAULT_TOKEN_ISSUER: &str = "chat-auth";
pub const DEFAULT_APP_ADDRESS: &str = "0.0.0.0:3000";
