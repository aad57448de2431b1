use super::{number, Payload};
use serde::Deserialize;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Load {
    #[serde(deserialize_with = "number::deserialize")]
    pub total_power: f64,
}

impl Payload for Load {
    const FIELDS: &'static [&'static str] = &["totalPower"];
}
