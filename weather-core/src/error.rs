use thiserror::Error;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Anything that went wrong before a usable HTTP body was in hand.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("failed to set up HTTP client: {0}")]
    Setup(#[source] BoxError),

    #[error("request to {url} timed out")]
    Timeout {
        url: String,
        #[source]
        source: BoxError,
    },

    #[error("could not connect to {url}: {source}")]
    Connect {
        url: String,
        #[source]
        source: BoxError,
    },

    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: BoxError,
    },

    #[error("failed to read response body from {url}: {source}")]
    Body {
        url: String,
        #[source]
        source: BoxError,
    },

    #[error("request to {url} failed with status {status}: {body}")]
    Status { url: String, status: u16, body: String },
}

/// The response arrived but does not look like a Bright Sky weather payload.
#[derive(Debug, Error)]
pub enum MalformedResponse {
    #[error("Bright Sky response was not valid JSON: {0}")]
    InvalidJson(#[source] serde_json::Error),

    #[error("Bright Sky payload was not a JSON object.")]
    NotAnObject,

    #[error("Bright Sky returned no weather records for this date.")]
    MissingWeather,

    #[error("Bright Sky payload field `weather` was not a list.")]
    WeatherNotAList,

    #[error("Bright Sky returned an empty weather list for this date.")]
    NoRecords,

    #[error("Bright Sky payload format was unexpected: latest record is not an object.")]
    RecordNotAnObject,

    #[error("Bright Sky weather record could not be decoded: {0}")]
    Record(#[source] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error(transparent)]
    Malformed(#[from] MalformedResponse),
}
