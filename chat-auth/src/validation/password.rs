use once_cell::sync::Lazy;
use regex::Regex;

const MIN_PASSWORD_CHARS: usize = 8;
// Bounds the argon2 input.
const MAX_PASSWORD_CHARS: usize = 128;

static UPPERCASE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[A-Z]").unwrap());
static SYMBOL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^A-Za-z0-9]").unwrap());

/// True if the password has 8 to 128 characters, one uppercase letter and one symbol.
pub fn is_valid_password(password: &str) -> bool {
    let chars = password.chars().count();
    (MIN_PASSWORD_CHARS..=MAX_PASSWORD_CHARS).contains(&chars)
        && UPPERCASE_RE.is_match(password)
        && SYMBOL_RE.is_match(password)
}
