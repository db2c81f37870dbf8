//! Core library for the `waybar-weather` status-bar module.
//!
//! This crate defines:
//! - Configuration handling
//! - The geolocation and forecast clients behind small provider traits
//! - Weather-code classification, value formatting and output composition
//! - The pipeline that ties them together and its fallback record
//!
//! It is used by `waybar-weather`, but the pieces are usable on their own.

pub mod cache;
pub mod classify;
pub mod compose;
pub mod config;
pub mod error;
pub mod format;
pub mod lookup;
pub mod model;
pub mod pipeline;
pub mod provider;

pub use classify::{Classification, CssClass, classify};
pub use config::Config;
pub use error::WeatherError;
pub use model::{ForecastResponse, Location, OutputRecord};
pub use pipeline::{Outcome, run, run_with};
pub use provider::{ForecastProvider, LocationProvider};
