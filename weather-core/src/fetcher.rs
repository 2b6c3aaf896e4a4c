use chrono::NaiveDate;
use serde_json::Value;

use crate::{
    error::{FetchError, MalformedResponse, TransportError},
    model::{Location, WeatherObservation},
    transport::HttpTransport,
    validate,
};

pub const BRIGHTSKY_WEATHER_URL: &str = "https://api.brightsky.dev/weather";

/// Issues the single Bright Sky request for a location and day.
#[derive(Debug)]
pub struct WeatherFetcher<T> {
    transport: T,
    endpoint: String,
}

impl<T: HttpTransport> WeatherFetcher<T> {
    pub fn new(transport: T) -> Self {
        Self::with_endpoint(transport, BRIGHTSKY_WEATHER_URL)
    }

    pub fn with_endpoint(transport: T, endpoint: impl Into<String>) -> Self {
        Self {
            transport,
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Fetch the latest observation for `location` on `date`.
    ///
    /// Exactly one request is made. Nothing is retried.
    pub async fn fetch(
        &self,
        location: &Location,
        date: NaiveDate,
    ) -> Result<WeatherObservation, FetchError> {
        let query = query_params(location.latitude, location.longitude, date);
        tracing::debug!(endpoint = %self.endpoint, ?query, "requesting Bright Sky weather");

        let response = self.transport.get(&self.endpoint, &query).await?;

        if !response.is_success() {
            return Err(TransportError::Status {
                url: self.endpoint.clone(),
                status: response.status,
                body: truncate_body(&response.body),
            }
            .into());
        }

        let payload: Value =
            serde_json::from_str(&response.body).map_err(MalformedResponse::InvalidJson)?;
        if !payload.is_object() {
            return Err(MalformedResponse::NotAnObject.into());
        }

        Ok(validate::latest_observation(&payload)?)
    }
}

/// Query string for `/weather`: coordinates to five decimals, ISO date.
pub fn query_params(latitude: f64, longitude: f64, date: NaiveDate) -> [(&'static str, String); 3] {
    [
        ("lat", format!("{latitude:.5}")),
        ("lon", format!("{longitude:.5}")),
        ("date", date.format("%Y-%m-%d").to_string()),
    ]
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((cut, _)) => format!("{}...", &body[..cut]),
        None => body.to_string(),
    }
}
