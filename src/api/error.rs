use http::StatusCode;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    LoginError(String),
    ApiError(String),
    /// Response body and the reason it could not be parsed.
    InvalidResponse(String, String),
    MissingData(StatusCode, String),
    MissingField(String),
    UnexpectedApiResponse(String),
    InternalError,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::LoginError(s) => write!(f, "Error while authenticating to API: {}", s),
            Error::ApiError(s) => write!(f, "Error calling API: {}", s),
            Error::InvalidResponse(body, e) => {
                write!(f, "Invalid API response ({}): {}", e, body)
            }
            Error::MissingData(status, body) => write!(
                f,
                "No `data` in API response (server responded {}): {}",
                status, body
            ),
            Error::MissingField(field) => write!(f, "Missing field `{}` in API response", field),
            Error::UnexpectedApiResponse(s) => write!(f, "Unexpected API response: {}", s),
            Error::InternalError => write!(f, "Internal error"),
        }
    }
}

impl std::error::Error for Error {}
