use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

use crate::{
    Config,
    error::WeatherError,
    lookup::{lookup, lookup_str},
    model::Location,
    provider::truncate_body,
};

use super::LocationProvider;

/// Why a lookup fell back to the neutral location. Only ever logged.
#[derive(Debug, Error)]
enum GeoError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("response is not JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("response has no `loc` field")]
    MissingLoc,

    #[error("unparseable `loc` value {0:?}")]
    BadLoc(String),
}

/// IP-based geolocation against an ipinfo.io-compatible endpoint
/// (`{"loc": "lat,lon", "city": "..."}`).
#[derive(Debug, Clone)]
pub struct IpInfoProvider {
    url: String,
    http: Client,
}

impl IpInfoProvider {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, WeatherError> {
        let http = Client::builder().timeout(timeout).build().map_err(WeatherError::Client)?;
        Ok(Self { url: url.into(), http })
    }

    pub fn from_config(config: &Config) -> Result<Self, WeatherError> {
        Self::new(config.geolocation_url.clone(), config.geolocation_timeout())
    }

    async fn fetch(&self) -> Result<Location, GeoError> {
        let res = self.http.get(&self.url).send().await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            return Err(GeoError::Status { status: status.as_u16(), body: truncate_body(&body) });
        }

        let parsed: Value = serde_json::from_str(&body)?;
        parse_location(&parsed)
    }
}

#[async_trait]
impl LocationProvider for IpInfoProvider {
    async fn locate(&self) -> Location {
        match self.fetch().await {
            Ok(location) => {
                tracing::debug!(
                    latitude = location.latitude,
                    longitude = location.longitude,
                    city = %location.city,
                    "resolved location"
                );
                location
            }
            Err(err) => {
                tracing::warn!(url = %self.url, error = %err, "geolocation failed, using 0,0");
                Location::default()
            }
        }
    }
}

/// `loc` must be exactly two comma-separated finite numbers.
fn parse_location(body: &Value) -> Result<Location, GeoError> {
    let loc = lookup(body, &["loc"]).ok_or(GeoError::MissingLoc)?;
    let loc = loc.as_str().ok_or_else(|| GeoError::BadLoc(loc.to_string()))?;

    let bad = || GeoError::BadLoc(loc.to_string());
    let (lat, lon) = loc.split_once(',').ok_or_else(bad)?;
    if lon.contains(',') {
        return Err(bad());
    }

    let coord = |s: &str| s.trim().parse::<f64>().ok().filter(|v| v.is_finite());
    let latitude = coord(lat).ok_or_else(bad)?;
    let longitude = coord(lon).ok_or_else(bad)?;

    let city = lookup_str(body, &["city"]).unwrap_or_default().to_string();

    Ok(Location { latitude, longitude, city })
}
