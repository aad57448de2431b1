use super::{number, Payload};
use serde::Deserialize;

/* Positive `current` means the battery is discharging */
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Battery {
    #[serde(deserialize_with = "number::deserialize")]
    pub current: f64,
    #[serde(deserialize_with = "number::deserialize")]
    pub voltage: f64,
    #[serde(deserialize_with = "number::deserialize")]
    pub temp: f64,
    #[serde(deserialize_with = "number::deserialize")]
    pub soc: f64,
    #[serde(deserialize_with = "number::deserialize")]
    pub charge_volt: f64,
}

impl Payload for Battery {
    const FIELDS: &'static [&'static str] = &["current", "voltage", "temp", "soc", "chargeVolt"];
}
