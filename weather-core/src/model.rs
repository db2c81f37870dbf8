use serde::Serialize;
use serde_json::Value;

use crate::{
    error::WeatherError,
    lookup::{lookup_array, lookup_f64, lookup_i64},
};

/// Approximate position of the machine. The default is the neutral
/// `(0.0, 0.0, "")` used whenever geolocation fails.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
    pub city: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CurrentConditions {
    pub temperature: Option<f64>,
    pub apparent_temperature: Option<f64>,
    pub weather_code: i64,
    pub is_day: i64,
    pub wind_speed: Option<f64>,
}

impl CurrentConditions {
    pub fn is_daytime(&self) -> bool {
        self.is_day == 1
    }
}

impl Default for CurrentConditions {
    fn default() -> Self {
        Self {
            temperature: None,
            apparent_temperature: None,
            weather_code: 0,
            is_day: 1,
            wind_speed: None,
        }
    }
}

/// Hourly arrays as sent upstream. Elements keep their raw JSON form so
/// formatting can tell `null`, numbers and garbage apart.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HourlySeries {
    pub precipitation_probability: Vec<Value>,
    pub relative_humidity: Vec<Value>,
    pub visibility: Vec<Value>,
}

/// Today's range. Index 0 is today.
#[derive(Debug, Clone, PartialEq)]
pub struct DailySeries {
    pub temp_min: Vec<Value>,
    pub temp_max: Vec<Value>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ForecastResponse {
    pub current: CurrentConditions,
    pub hourly: HourlySeries,
    /// `None` unless both min and max arrays are non-empty.
    pub daily: Option<DailySeries>,
}

impl ForecastResponse {
    /// Extract the fields we use from a raw forecast body.
    ///
    /// Only a non-object root is an error; every nested field is optional.
    pub fn from_json(root: &Value) -> Result<Self, WeatherError> {
        if !root.is_object() {
            return Err(WeatherError::Parse("expected a JSON object at the top level".into()));
        }

        let defaults = CurrentConditions::default();
        let current = CurrentConditions {
            temperature: lookup_f64(root, &["current", "temperature_2m"]),
            apparent_temperature: lookup_f64(root, &["current", "apparent_temperature"]),
            weather_code: lookup_i64(root, &["current", "weather_code"])
                .unwrap_or(defaults.weather_code),
            is_day: lookup_i64(root, &["current", "is_day"]).unwrap_or(defaults.is_day),
            wind_speed: lookup_f64(root, &["current", "wind_speed_10m"]),
        };

        let hourly = HourlySeries {
            precipitation_probability: series(root, &["hourly", "precipitation_probability"]),
            relative_humidity: series(root, &["hourly", "relative_humidity_2m"]),
            visibility: series(root, &["hourly", "visibility"]),
        };

        let temp_min = series(root, &["daily", "temperature_2m_min"]);
        let temp_max = series(root, &["daily", "temperature_2m_max"]);
        let daily = (!temp_min.is_empty() && !temp_max.is_empty())
            .then_some(DailySeries { temp_min, temp_max });

        Ok(Self { current, hourly, daily })
    }
}

fn series(root: &Value, path: &[&str]) -> Vec<Value> {
    lookup_array(root, path).map(<[Value]>::to_vec).unwrap_or_default()
}

/// The single JSON line printed for the bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputRecord {
    pub text: String,
    pub alt: String,
    pub tooltip: String,
    pub class: String,
}

impl OutputRecord {
    pub fn to_json_line(&self) -> String {
        // A struct of four strings always serializes.
        serde_json::to_string(self).unwrap_or_default()
    }
}
