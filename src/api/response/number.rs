use serde::Deserialize;
use serde_json::Value;

/// Accept either a JSON number or a string holding one; the API is not consistent about it.
pub fn deserialize<'de, D: serde::Deserializer<'de>>(d: D) -> Result<f64, D::Error> {
    let value = Value::deserialize(d)?;

    match &value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
    .filter(|v| v.is_finite())
    .ok_or_else(|| serde::de::Error::custom(format!("expected a number, got {}", value)))
}
