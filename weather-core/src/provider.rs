use crate::{
    error::WeatherError,
    model::{ForecastResponse, Location},
};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod ipinfo;
pub mod openmeteo;

pub use ipinfo::IpInfoProvider;
pub use openmeteo::OpenMeteoProvider;

/// Source of the machine's approximate position.
///
/// Infallible by contract: implementations substitute
/// [`Location::default`] for any failure.
#[async_trait]
pub trait LocationProvider: Send + Sync + Debug {
    async fn locate(&self) -> Location;
}

/// Source of current/hourly/daily conditions for a position. Errors are
/// fatal for the run and end up in the fallback record.
#[async_trait]
pub trait ForecastProvider: Send + Sync + Debug {
    async fn forecast(&self, location: &Location) -> Result<ForecastResponse, WeatherError>;
}

/// Cut long upstream bodies down for log lines.
pub(crate) fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_short_body_untouched() {
        assert_eq!(truncate_body("ok"), "ok");
    }

    #[test]
    fn truncate_respects_char_boundaries() {
        let body = "é".repeat(300);
        let cut = truncate_body(&body);
        assert!(cut.ends_with("..."));
        assert_eq!(cut.chars().count(), 203);
    }
}
