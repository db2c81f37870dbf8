use thiserror::Error;

/// Failures that end the forecast pipeline for this run.
///
/// The binary never propagates these: they are folded into the fallback
/// record, which embeds [`WeatherError::kind`].
#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("request to {url} failed: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("request to {url} timed out")]
    Timeout { url: String },

    #[error("{url} answered with status {status}")]
    Status { url: String, status: u16 },

    #[error("malformed forecast response: {0}")]
    Parse(String),
}

impl WeatherError {
    /// Stable tag shown to the user when the pipeline falls back.
    pub fn kind(&self) -> &'static str {
        match self {
            WeatherError::Client(_) => "ClientError",
            WeatherError::Network { .. } => "NetworkError",
            WeatherError::Timeout { .. } => "TimeoutError",
            WeatherError::Status { .. } => "HttpStatusError",
            WeatherError::Parse(_) => "ParseError",
        }
    }

    /// Classify a transport error from `reqwest`.
    pub(crate) fn from_request(url: &str, err: reqwest::Error) -> Self {
        if err.is_timeout() {
            WeatherError::Timeout { url: url.to_string() }
        } else if let Some(status) = err.status() {
            WeatherError::Status { url: url.to_string(), status: status.as_u16() }
        } else if err.is_decode() {
            WeatherError::Parse(err.to_string())
        } else {
            WeatherError::Network { url: url.to_string(), source: err }
        }
    }
}

impl From<serde_json::Error> for WeatherError {
    fn from(err: serde_json::Error) -> Self {
        WeatherError::Parse(err.to_string())
    }
}
