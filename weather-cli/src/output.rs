use berlin_weather_core::{FetchError, Location, WeatherObservation};
use chrono::NaiveDate;

pub const SOURCE_NAME: &str = "Bright Sky";

/// The whole report, built up front so it is printed in one piece or not at all.
pub fn render(location: &Location, date: NaiveDate, obs: &WeatherObservation) -> String {
    format!(
        "{SOURCE_NAME} - {} - {}\n\
         time: {}\n\
         temperature: {}\n\
         precipitation: {}\n\
         wind speed: {}\n",
        location.name,
        date.format("%Y-%m-%d"),
        obs.time(),
        measurement(obs.temperature_c(), "C"),
        measurement(obs.precipitation_mm(), "mm"),
        measurement(obs.wind_speed_ms(), "m/s"),
    )
}

fn measurement(value: Option<f64>, unit: &str) -> String {
    match value {
        Some(v) => format!("{v:?} {unit}"),
        None => "unknown".to_string(),
    }
}

/// Single stderr line for a failed fetch.
pub fn failure_line(err: &FetchError) -> String {
    let line = match err {
        FetchError::Transport(e) => format!("Network error: {e}"),
        FetchError::Malformed(e) => format!("Error: {e}"),
    };
    line.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Exit status for a failed fetch: 2 for transport problems, 1 for everything else.
pub fn exit_status(err: &FetchError) -> u8 {
    match err {
        FetchError::Transport(_) => 2,
        FetchError::Malformed(_) => 1,
    }
}
