//! One pass: locate → forecast → classify → format → compose.
//!
//! Geolocation never fails (it degrades to 0,0). Everything after it is
//! fallible, and any error turns into the fixed fallback record.

use std::path::Path;

use crate::{
    Config,
    cache::write_cache,
    classify::{CssClass, classify},
    compose::{self, glyph},
    error::WeatherError,
    format::DisplayValues,
    model::{Location, OutputRecord},
    provider::{ForecastProvider, IpInfoProvider, LocationProvider, OpenMeteoProvider},
};

/// Result of a run: the record to print and, on success only, the text for
/// the cache file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub record: OutputRecord,
    pub cache_text: Option<String>,
}

impl Outcome {
    /// The record shown when the forecast could not be produced.
    pub fn fallback(err: &WeatherError) -> Self {
        tracing::warn!(kind = err.kind(), error = %err, "weather unavailable");
        Self {
            record: OutputRecord {
                text: format!("{}  N/A", glyph::UNAVAILABLE),
                alt: "Weather unavailable".to_string(),
                tooltip: format!("Weather unavailable: {}", err.kind()),
                class: CssClass::Default.to_string(),
            },
            cache_text: None,
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.cache_text.is_none()
    }

    /// Write the cache summary, if any. Never fails.
    pub fn persist(&self, path: &Path) -> bool {
        match &self.cache_text {
            Some(text) => write_cache(path, text),
            None => false,
        }
    }
}

/// Run the pipeline against the configured upstream services.
pub async fn run(config: &Config) -> Outcome {
    let location = match IpInfoProvider::from_config(config) {
        Ok(locator) => locator.locate().await,
        Err(err) => {
            tracing::warn!(error = %err, "geolocation client unavailable, using 0,0");
            Location::default()
        }
    };

    match OpenMeteoProvider::from_config(config) {
        Ok(forecaster) => report(&forecaster, &location).await,
        Err(err) => Outcome::fallback(&err),
    }
}

/// Run the pipeline with explicit providers.
pub async fn run_with(locator: &dyn LocationProvider, forecaster: &dyn ForecastProvider) -> Outcome {
    let location = locator.locate().await;
    report(forecaster, &location).await
}

/// Forecast and render for a known location; errors become the fallback.
pub async fn report(forecaster: &dyn ForecastProvider, location: &Location) -> Outcome {
    match try_report(forecaster, location).await {
        Ok(outcome) => outcome,
        Err(err) => Outcome::fallback(&err),
    }
}

async fn try_report(
    forecaster: &dyn ForecastProvider,
    location: &Location,
) -> Result<Outcome, WeatherError> {
    let forecast = forecaster.forecast(location).await?;

    let class = classify(forecast.current.weather_code, forecast.current.is_daytime());
    let values = DisplayValues::from_forecast(&forecast);
    tracing::debug!(code = forecast.current.weather_code, class = %class.css_class, ?values, "formatted forecast");

    Ok(Outcome {
        record: compose::record(&class, &values, location),
        cache_text: Some(compose::cache_text(&class, &values)),
    })
}
