use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

use crate::{
    Config,
    error::WeatherError,
    model::{ForecastResponse, Location},
    provider::truncate_body,
};

use super::ForecastProvider;

const CURRENT_FIELDS: &str =
    "temperature_2m,apparent_temperature,weather_code,wind_speed_10m,is_day";
const HOURLY_FIELDS: &str = "precipitation_probability,visibility,relative_humidity_2m";
const DAILY_FIELDS: &str = "temperature_2m_max,temperature_2m_min";

/// Open-Meteo forecast API client (no key required).
#[derive(Debug, Clone)]
pub struct OpenMeteoProvider {
    url: String,
    http: Client,
}

impl OpenMeteoProvider {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, WeatherError> {
        let http = Client::builder().timeout(timeout).build().map_err(WeatherError::Client)?;
        Ok(Self { url: url.into(), http })
    }

    pub fn from_config(config: &Config) -> Result<Self, WeatherError> {
        Self::new(config.forecast_url.clone(), config.forecast_timeout())
    }

    fn query(location: &Location) -> Vec<(&'static str, String)> {
        vec![
            ("latitude", location.latitude.to_string()),
            ("longitude", location.longitude.to_string()),
            ("current", CURRENT_FIELDS.to_string()),
            ("hourly", HOURLY_FIELDS.to_string()),
            ("daily", DAILY_FIELDS.to_string()),
            ("timezone", "auto".to_string()),
        ]
    }
}

#[async_trait]
impl ForecastProvider for OpenMeteoProvider {
    async fn forecast(&self, location: &Location) -> Result<ForecastResponse, WeatherError> {
        tracing::debug!(
            url = %self.url,
            latitude = location.latitude,
            longitude = location.longitude,
            "requesting forecast"
        );

        let res = self
            .http
            .get(&self.url)
            .query(&Self::query(location))
            .send()
            .await
            .map_err(|e| WeatherError::from_request(&self.url, e))?;

        let status = res.status();
        let body = res.text().await.map_err(|e| WeatherError::from_request(&self.url, e))?;

        if !status.is_success() {
            tracing::debug!(status = %status, body = %truncate_body(&body), "forecast rejected");
            return Err(WeatherError::Status { url: self.url.clone(), status: status.as_u16() });
        }

        let parsed: Value = serde_json::from_str(&body)?;
        ForecastResponse::from_json(&parsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn provider_for(server: &MockServer, timeout: Duration) -> OpenMeteoProvider {
        OpenMeteoProvider::new(format!("{}/v1/forecast", server.uri()), timeout)
            .expect("client builds")
    }

    fn oslo() -> Location {
        Location { latitude: 59.91, longitude: 10.75, city: "Oslo".into() }
    }

    #[tokio::test]
    async fn sends_expected_query_and_parses_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/forecast"))
            .and(query_param("latitude", "59.91"))
            .and(query_param("longitude", "10.75"))
            .and(query_param("current", CURRENT_FIELDS))
            .and(query_param("hourly", HOURLY_FIELDS))
            .and(query_param("daily", DAILY_FIELDS))
            .and(query_param("timezone", "auto"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "current": {"temperature_2m": 5.2, "weather_code": 71, "is_day": 0},
                "hourly": {"visibility": [8000]}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let f = provider_for(&server, Duration::from_secs(2))
            .forecast(&oslo())
            .await
            .expect("forecast succeeds");

        assert_eq!(f.current.temperature, Some(5.2));
        assert_eq!(f.current.weather_code, 71);
        assert_eq!(f.current.is_day, 0);
        assert_eq!(f.hourly.visibility, vec![json!(8000)]);
        assert!(f.daily.is_none());
    }

    #[tokio::test]
    async fn non_success_status_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500).set_body_string("upstream down"))
            .mount(&server)
            .await;

        let err = provider_for(&server, Duration::from_secs(2))
            .forecast(&oslo())
            .await
            .unwrap_err();
        assert_eq!(err.kind(), "HttpStatusError");
    }

    #[tokio::test]
    async fn invalid_json_is_a_parse_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{\"current\": "))
            .mount(&server)
            .await;

        let err = provider_for(&server, Duration::from_secs(2))
            .forecast(&oslo())
            .await
            .unwrap_err();
        assert_eq!(err.kind(), "ParseError");
    }

    #[tokio::test]
    async fn slow_upstream_times_out() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({}))
                    .set_delay(Duration::from_secs(3)),
            )
            .mount(&server)
            .await;

        let err = provider_for(&server, Duration::from_millis(200))
            .forecast(&oslo())
            .await
            .unwrap_err();
        assert_eq!(err.kind(), "TimeoutError");
    }

    #[tokio::test]
    async fn connection_refused_is_a_network_error() {
        let provider = OpenMeteoProvider::new("http://127.0.0.1:9/v1/forecast", Duration::from_secs(2))
            .expect("client builds");
        let err = provider.forecast(&oslo()).await.unwrap_err();
        assert_eq!(err.kind(), "NetworkError");
    }
}
