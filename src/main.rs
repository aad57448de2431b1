use config::Config;
use serde::Serialize;
use std::time::Duration;
use sunsynk::api::endpoint::API_URL;
use sunsynk::{ClientConfig, Credentials, HttpTransport, InverterClient};

#[derive(Clone, serde::Deserialize)]
pub struct SunsynkConfig {
    serial_number: u64,
    username: String,
    password: String,
    api_url: String,
    /// Request timeout in seconds, 0 disables it
    timeout: u64,
}

pub fn read_settings() -> Result<SunsynkConfig, config::ConfigError> {
    let mut settings = Config::default();
    settings
        .set_default("api_url", API_URL)?
        .set_default("timeout", 0_i64)?
        .merge(config::Environment::with_prefix("SUNSYNK"))?;

    settings.try_into()
}

fn print_result<T: Serialize>(name: &str, result: Result<T, sunsynk::Error>) {
    match result {
        Ok(value) => match serde_json::to_string_pretty(&value) {
            Ok(json) => println!("{}: {}", name, json),
            Err(e) => log::error!("Unable to format {}: {}", name, e),
        },
        Err(e) => println!("{}: {}", name, e),
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let settings = read_settings()?;
    let config = ClientConfig {
        api_url: settings.api_url,
        timeout: Some(settings.timeout)
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs),
    };

    let transport = HttpTransport::new(&config)?;
    let client = InverterClient::with_transport(
        config,
        transport,
        settings.serial_number,
        Credentials::new(settings.username, settings.password),
    )?;

    print_result("battery", client.battery());
    print_result("pv", client.pv());
    print_result("load", client.load());
    print_result("info", client.info());

    Ok(())
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        log::error!("{}", e);
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
