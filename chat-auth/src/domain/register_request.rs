use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug)]
pub struct RegisterRequestBody {
    pub username: String,
    pub password: String,
}
