use crate::validation::is_valid_username;

#[derive(PartialEq, Debug, Clone, Eq, Hash)]
pub struct Username(String);

impl Username {
    pub fn parse(username: String) -> Result<Username, String> {
        match is_valid_username(&username) {
            true => Ok(Username(username)),
            false => Err(format!("Username {} is not valid", username)),
        }
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
