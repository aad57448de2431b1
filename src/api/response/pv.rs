use super::{number, Payload};
use serde::Deserialize;

#[derive(Deserialize)]
pub struct Output {
    /// Power coming off the panels
    #[serde(rename = "pInv", deserialize_with = "number::deserialize")]
    pub p_inv: f64,
    /// Power consumed by the household
    #[serde(deserialize_with = "number::deserialize")]
    pub pac: f64,
}

impl Payload for Output {
    const FIELDS: &'static [&'static str] = &["pInv", "pac"];
}
