use super::Payload;

#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub payload: Payload,
}
