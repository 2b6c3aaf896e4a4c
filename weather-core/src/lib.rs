//! Core library for the `berlin-weather` CLI.
//!
//! This crate defines:
//! - The transport capability used to reach Bright Sky
//! - Request construction and the single-shot fetcher
//! - Validation of the untyped JSON payload into a [`WeatherObservation`]
//! - Configuration handling
//!
//! It is used by `berlin-weather`, but can also be reused by other binaries or services.

pub mod config;
pub mod error;
pub mod fetcher;
pub mod model;
pub mod transport;
pub mod validate;

pub use config::{Config, TimeoutConfig};
pub use error::{FetchError, MalformedResponse, TransportError};
pub use fetcher::{BRIGHTSKY_WEATHER_URL, WeatherFetcher};
pub use model::{BERLIN, Location, WeatherObservation};
pub use transport::{HttpResponse, HttpTransport, ReqwestTransport, Timeouts};
