use super::Error;
use crate::model::ClientConfig;
use http::{HeaderMap, Method, StatusCode};
use serde_json::Value;

/// Outgoing HTTP request, independent of the HTTP client in use.
#[derive(Debug, Clone)]
pub struct Request {
    pub method: Method,
    pub url: String,
    pub headers: HeaderMap,
    pub body: Option<Value>,
}

/// Status and raw body of an HTTP response. The status is never interpreted by the transport.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: StatusCode,
    pub body: String,
}

/// Capability of sending a request and receiving status and body.
pub trait Transport {
    fn send(&self, request: Request) -> Result<RawResponse, Error>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn send(&self, request: Request) -> Result<RawResponse, Error> {
        (**self).send(request)
    }
}

/// Blocking `reqwest` transport.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::blocking::Client,
}

impl HttpTransport {
    pub fn new(config: &ClientConfig) -> Result<Self, Error> {
        reqwest::blocking::ClientBuilder::new()
            .timeout(config.timeout)
            .build()
            .map(|client| HttpTransport { client })
            .or(Err(Error::InternalError))
    }
}

impl Transport for HttpTransport {
    fn send(&self, request: Request) -> Result<RawResponse, Error> {
        let builder = self
            .client
            .request(request.method, request.url.as_str())
            .headers(request.headers);

        let builder = match request.body {
            Some(body) => builder.json(&body),
            None => builder,
        };

        let response = builder
            .send()
            .map_err(|e| Error::ApiError(e.to_string()))?;
        let status = response.status();

        response
            .text()
            .map_err(|e| Error::ApiError(format!("Error reading API response: {}", e)))
            .map(|body| RawResponse { status, body })
    }
}
