//! Shape checks for Bright Sky `/weather` payloads.
//!
//! The envelope is matched by hand so that every wrong shape gets its own
//! [`MalformedResponse`] variant. The latest record is then decoded into
//! `RawRecord`, whose field decoders never reject a value: a non-numeric
//! measurement is recorded as unknown instead of failing the whole parse.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::{error::MalformedResponse, model::WeatherObservation};

#[derive(Debug, Deserialize)]
struct RawRecord {
    #[serde(default, deserialize_with = "lenient_text")]
    timestamp: String,
    #[serde(default, deserialize_with = "lenient_number")]
    temperature: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    precipitation: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    wind_speed: Option<f64>,
}

fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Number(n) => n.as_f64(),
        _ => None,
    })
}

fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) => s,
        other => other.to_string(),
    })
}

/// Pick the last entry of `weather` and turn it into a [`WeatherObservation`].
///
/// Records are trusted to be in chronological order; timestamps are not
/// compared.
pub fn latest_observation(payload: &Value) -> Result<WeatherObservation, MalformedResponse> {
    let Value::Object(map) = payload else {
        return Err(MalformedResponse::NotAnObject);
    };

    let records = match map.get("weather") {
        None => return Err(MalformedResponse::MissingWeather),
        Some(Value::Array(records)) => records,
        Some(_) => return Err(MalformedResponse::WeatherNotAList),
    };

    let latest = records.last().ok_or(MalformedResponse::NoRecords)?;
    if !latest.is_object() {
        return Err(MalformedResponse::RecordNotAnObject);
    }

    let raw = RawRecord::deserialize(latest).map_err(MalformedResponse::Record)?;
    tracing::debug!(
        records = records.len(),
        timestamp = %raw.timestamp,
        "selected latest weather record"
    );

    Ok(WeatherObservation::new(
        raw.timestamp,
        raw.temperature,
        raw.precipitation,
        raw.wind_speed,
    ))
}
