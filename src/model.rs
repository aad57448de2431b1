use serde::Serialize;
use serde_json::Value;
use std::fmt;
use std::time::Duration;

use crate::api::endpoint;

type Watts = f64;
type Volts = f64;
type Amperes = f64;

#[derive(Clone, PartialEq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Credentials {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<hidden>")
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub api_url: String,
    /// `None` waits for the server indefinitely.
    pub timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            api_url: endpoint::API_URL.to_string(),
            timeout: None,
        }
    }
}

/// Battery state. Charging is positive, discharging negative.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatteryStatus {
    pub charge_current: Amperes,
    pub charge_power: i64,
    pub voltage: Volts,
    pub temp: f64,
    /// State of charge (%)
    pub soc: f64,
    pub charge_volt: Volts,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoadStatus {
    pub total_power: Watts,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PvStatus {
    pub pv_incoming_power: Watts,
    pub pv_consumed_power: Watts,
    /// Negative when consumption exceeds generation.
    pub pv_surplus_power: Watts,
}

/// General inverter and account details, vendor values kept as they are.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InverterInfo {
    pub e_total: Value,
    pub e_month: Value,
    pub e_today: Value,
    pub eyear: Value,
    pub sn: Value,
    pub alias: Value,
    pub gsn: Value,
    pub status: Value,
    pub run_status: Value,
    pub r#type: Value,
    pub thumb_url: Value,
    pub opened: Value,
    pub version: Value,
    pub plant: Value,
    pub user: Value,
}
