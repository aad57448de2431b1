pub mod api;
pub mod model;

pub use api::transport::{HttpTransport, RawResponse, Request, Transport};
pub use api::{Error, InverterClient};
pub use model::{BatteryStatus, ClientConfig, Credentials, InverterInfo, LoadStatus, PvStatus};
