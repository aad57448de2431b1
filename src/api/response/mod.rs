pub mod battery;
pub mod info;
pub mod load;
pub mod login;
mod number;
pub mod pv;

use super::transport::RawResponse;
use super::Error;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Payload found under `data`, listing every vendor key read from it.
pub trait Payload: DeserializeOwned {
    const FIELDS: &'static [&'static str];
}

/// Unpack the `{"data": ...}` envelope. Non-JSON bodies and a missing or null `data` are errors;
/// the HTTP status itself is not.
pub fn unpack(response: RawResponse) -> Result<Value, Error> {
    let RawResponse { status, body } = response;

    let mut value = serde_json::from_str::<Value>(&body)
        .map_err(|e| Error::InvalidResponse(body.clone(), e.to_string()))?;

    match value.get_mut("data").map(Value::take) {
        None | Some(Value::Null) => Err(Error::MissingData(status, body)),
        Some(data) => Ok(data),
    }
}

/// Decode `data` into `T`, failing on the first absent key of `T::FIELDS`.
pub fn decode<T: Payload>(data: Value) -> Result<T, Error> {
    if !data.is_object() {
        return Err(Error::UnexpectedApiResponse(format!(
            "expected an object, got {}",
            data
        )));
    }

    if let Some(field) = T::FIELDS.iter().find(|field| data.get(**field).is_none()) {
        return Err(Error::MissingField(field.to_string()));
    }

    serde_json::from_value(data).map_err(|e| Error::UnexpectedApiResponse(e.to_string()))
}
