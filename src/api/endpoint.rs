pub type Endpoint = str;

pub const API_URL: &str = "https://api.sunsynk.net";

pub const LOGIN: &Endpoint = "/oauth/token";
pub const INVERTER: &Endpoint = "/api/v1/inverter/";

pub fn battery(serial_number: u64) -> String {
    format!(
        "{}battery/{}/realtime?sn={}&lan=en",
        INVERTER, serial_number, serial_number
    )
}

pub fn load(serial_number: u64) -> String {
    format!(
        "{}load/{}/realtime?sn={}",
        INVERTER, serial_number, serial_number
    )
}

pub fn pv(serial_number: u64) -> String {
    format!("{}{}/realtime/output", INVERTER, serial_number)
}

pub fn info(serial_number: u64) -> String {
    format!("{}{}", INVERTER, serial_number)
}
