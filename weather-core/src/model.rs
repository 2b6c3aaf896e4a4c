/// A fixed point on the map the tool reports weather for.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Location {
    pub name: &'static str,
    pub latitude: f64,
    pub longitude: f64,
}

pub const BERLIN: Location = Location {
    name: "Berlin",
    latitude: 52.520_00,
    longitude: 13.405_00,
};

/// Most recent observation picked out of a Bright Sky response.
///
/// Only [`crate::validate::latest_observation`] builds one, and only from a
/// fully validated record.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherObservation {
    time: String,
    temperature_c: Option<f64>,
    precipitation_mm: Option<f64>,
    wind_speed_ms: Option<f64>,
}

impl WeatherObservation {
    pub(crate) fn new(
        time: String,
        temperature_c: Option<f64>,
        precipitation_mm: Option<f64>,
        wind_speed_ms: Option<f64>,
    ) -> Self {
        Self {
            time,
            temperature_c,
            precipitation_mm,
            wind_speed_ms,
        }
    }

    /// Timestamp exactly as the source reported it.
    pub fn time(&self) -> &str {
        &self.time
    }

    pub fn temperature_c(&self) -> Option<f64> {
        self.temperature_c
    }

    pub fn precipitation_mm(&self) -> Option<f64> {
        self.precipitation_mm
    }

    pub fn wind_speed_ms(&self) -> Option<f64> {
        self.wind_speed_ms
    }
}
