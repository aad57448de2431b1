pub mod endpoint;
pub mod error;
pub mod response;
pub mod transport;

use crate::model;
pub use error::Error;
use http::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use http::Method;
use response::battery::Battery;
use response::info::Info;
use response::load::Load;
use response::login::Login;
use response::pv::Output;
use response::Payload;
use serde_json::json;
use transport::{HttpTransport, Request, Transport};

const APPLICATION_JSON: &str = "application/json";
const GRANT_TYPE: &str = "password";
const CLIENT_ID: &str = "csp-web";

/// Logged-in client of a single inverter.
///
/// The bearer token is obtained once by the constructor and reused for every call; it is never
/// refreshed.
#[derive(Debug)]
pub struct InverterClient<T = HttpTransport> {
    api_url: String,
    serial_number: u64,
    credentials: model::Credentials,
    authorization: HeaderValue,
    transport: T,
}

fn json_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static(APPLICATION_JSON));
    headers.insert(ACCEPT, HeaderValue::from_static(APPLICATION_JSON));
    headers
}

/// Exchange `credentials` for a bearer token and return the `Authorization` header value.
fn login<T: Transport>(
    transport: &T,
    api_url: &str,
    credentials: &model::Credentials,
) -> Result<HeaderValue, Error> {
    log::debug!("Logging in as {}", credentials.username);

    let request = Request {
        method: Method::POST,
        url: format!("{}{}", api_url, endpoint::LOGIN),
        headers: json_headers(),
        body: Some(json!({
            "username": credentials.username,
            "password": credentials.password,
            "grant_type": GRANT_TYPE,
            "client_id": CLIENT_ID,
        })),
    };

    let login = transport
        .send(request)
        .and_then(response::unpack)
        .and_then(response::decode::<Login>)
        .map_err(|e| Error::LoginError(e.to_string()))?;

    if login.access_token.is_empty() {
        return Err(Error::LoginError(String::from(
            "Empty access_token received",
        )));
    }

    let mut authorization = HeaderValue::from_str(&format!("Bearer {}", login.access_token))
        .map_err(|e| Error::LoginError(format!("Unusable access_token received: {}", e)))?;
    authorization.set_sensitive(true);
    Ok(authorization)
}

impl InverterClient<HttpTransport> {
    /// Log in to the API at its default address.
    pub fn new(
        serial_number: u64,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, Error> {
        let config = model::ClientConfig::default();
        let transport = HttpTransport::new(&config)?;
        Self::with_transport(
            config,
            transport,
            serial_number,
            model::Credentials::new(username, password),
        )
    }
}

impl<T: Transport> InverterClient<T> {
    pub fn with_transport(
        config: model::ClientConfig,
        transport: T,
        serial_number: u64,
        credentials: model::Credentials,
    ) -> Result<Self, Error> {
        let authorization = login(&transport, &config.api_url, &credentials)?;
        log::debug!("Logged in, serial number {}", serial_number);

        Ok(InverterClient {
            api_url: config.api_url,
            serial_number,
            credentials,
            authorization,
            transport,
        })
    }

    pub fn serial_number(&self) -> u64 {
        self.serial_number
    }

    pub fn credentials(&self) -> &model::Credentials {
        &self.credentials
    }

    /// `Authorization` header value sent with every request.
    pub fn authorization(&self) -> &HeaderValue {
        &self.authorization
    }

    fn get<P: Payload>(&self, path: &str) -> Result<P, Error> {
        let mut headers = json_headers();
        headers.insert(AUTHORIZATION, self.authorization.clone());

        let request = Request {
            method: Method::GET,
            url: format!("{}{}", self.api_url, path),
            headers,
            body: None,
        };

        let response = self.transport.send(request)?;

        log::trace!(
            "path: {}, status: {}, response_text: {}",
            path,
            response.status,
            response.body
        );
        if !response.status.is_success() {
            log::warn!("{} responded {}", path, response.status);
        }

        response::unpack(response).and_then(response::decode)
    }

    /// Read battery state. Current and power are positive while charging.
    pub fn battery(&self) -> Result<model::BatteryStatus, Error> {
        log::debug!("Reading battery of {}", self.serial_number);

        self.get::<Battery>(&endpoint::battery(self.serial_number))
            .map(|resp| model::BatteryStatus {
                /* the API reports discharge as positive current */
                charge_current: -resp.current,
                charge_power: (-resp.current * resp.voltage).round() as i64,
                voltage: resp.voltage,
                temp: resp.temp,
                soc: resp.soc,
                charge_volt: resp.charge_volt,
            })
    }

    pub fn load(&self) -> Result<model::LoadStatus, Error> {
        log::debug!("Reading load of {}", self.serial_number);

        self.get::<Load>(&endpoint::load(self.serial_number))
            .map(|resp| model::LoadStatus {
                total_power: resp.total_power,
            })
    }

    /// Read solar generation and how much of it is left after household consumption.
    pub fn pv(&self) -> Result<model::PvStatus, Error> {
        log::debug!("Reading PV output of {}", self.serial_number);

        self.get::<Output>(&endpoint::pv(self.serial_number))
            .map(|resp| model::PvStatus {
                pv_incoming_power: resp.p_inv,
                pv_consumed_power: resp.pac,
                pv_surplus_power: resp.p_inv - resp.pac,
            })
    }

    pub fn info(&self) -> Result<model::InverterInfo, Error> {
        log::debug!("Reading info of {}", self.serial_number);

        self.get::<Info>(&endpoint::info(self.serial_number))
            .map(|resp| model::InverterInfo {
                e_total: resp.etotal,
                e_month: resp.emonth,
                e_today: resp.etoday,
                eyear: resp.eyear,
                sn: resp.sn,
                alias: resp.alias,
                gsn: resp.gsn,
                status: resp.status,
                run_status: resp.run_status,
                r#type: resp.r#type,
                thumb_url: resp.thumb_url,
                opened: resp.opened,
                version: resp.version,
                plant: resp.plant,
                user: resp.user,
            })
    }
}
