use once_cell::sync::Lazy;
use regex::Regex;

static USERNAME_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z0-9_.-]{3,32}$").unwrap());

pub fn is_valid_username(username: &str) -> bool {
    USERNAME_RE.is_match(username)
}
