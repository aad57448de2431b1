use super::Payload;
use serde::Deserialize;

#[derive(Deserialize)]
pub struct Login {
    pub access_token: String,
}

impl Payload for Login {
    const FIELDS: &'static [&'static str] = &["access_token"];
}
