//! Numeric fields → display strings.
//!
//! Missing values become [`PLACEHOLDER`]. Visibility is the exception: with
//! no hourly visibility data at all it is omitted (empty string) rather than
//! shown as a placeholder.

use serde_json::Value;

use crate::model::{DailySeries, ForecastResponse};

pub const PLACEHOLDER: &str = "--";

/// Hours included in the precipitation outlook.
pub const PRECIP_HOURS: usize = 5;

/// Display strings for one forecast, ready for composition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayValues {
    pub temp: String,
    pub feels_like: String,
    pub temp_min: String,
    pub temp_max: String,
    pub wind: String,
    pub humidity: String,
    /// Empty when the hourly visibility series was empty.
    pub visibility: String,
    /// Empty when no hour in the window had a probability.
    pub precip_summary: String,
}

impl DisplayValues {
    pub fn from_forecast(forecast: &ForecastResponse) -> Self {
        let cur = &forecast.current;
        let hourly = &forecast.hourly;
        let (temp_min, temp_max) = daily_range(forecast.daily.as_ref());

        Self {
            temp: degrees(cur.temperature),
            feels_like: degrees(cur.apparent_temperature),
            temp_min,
            temp_max,
            wind: whole(cur.wind_speed),
            humidity: whole(hourly.relative_humidity.first().and_then(Value::as_f64)),
            visibility: visibility_km(&hourly.visibility),
            precip_summary: precip_summary(&hourly.precipitation_probability),
        }
    }
}

/// Round half to even (`0.5 → 0`, `1.5 → 2`).
fn round_whole(v: f64) -> i64 {
    v.round_ties_even() as i64
}

/// `21.6 → "22°"`, absent → `"--"`.
pub fn degrees(v: Option<f64>) -> String {
    match v {
        Some(v) => format!("{}°", round_whole(v)),
        None => PLACEHOLDER.to_string(),
    }
}

/// `11.2 → "11"`, absent → `"--"`. Units are added by the caller.
pub fn whole(v: Option<f64>) -> String {
    match v {
        Some(v) => round_whole(v).to_string(),
        None => PLACEHOLDER.to_string(),
    }
}

/// First hourly visibility in km with at most two decimals.
///
/// Empty series → `""`; first entry `null` or not a number → `"--"`.
pub fn visibility_km(series: &[Value]) -> String {
    let Some(first) = series.first() else {
        return String::new();
    };

    match first.as_f64() {
        Some(meters) => {
            let km = (meters / 1000.0 * 100.0).round_ties_even() / 100.0;
            if km.fract() == 0.0 { format!("{km:.1}") } else { format!("{km}") }
        }
        None => PLACEHOLDER.to_string(),
    }
}

/// `"50% 20% 10%"` from the first [`PRECIP_HOURS`] entries, skipping any
/// that are not numbers. Numbers keep their JSON form (`50` vs `50.5`).
pub fn precip_summary(series: &[Value]) -> String {
    series
        .iter()
        .take(PRECIP_HOURS)
        .filter_map(|v| match v {
            Value::Number(n) => Some(format!("{n}%")),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn daily_range(daily: Option<&DailySeries>) -> (String, String) {
    let Some(d) = daily else {
        return (PLACEHOLDER.to_string(), PLACEHOLDER.to_string());
    };

    let today = |s: &Vec<Value>| degrees(s.first().and_then(Value::as_f64));
    (today(&d.temp_min), today(&d.temp_max))
}
