//! Core library for the `forecast` CLI.
//!
//! This crate defines:
//! - Shared domain models and the per-location error taxonomy
//! - The provider abstraction and its HTTP implementation
//! - The concurrent fetch → convert pipeline
//! - Configuration handling
//!
//! It is used by `forecast-cli`, but can also be reused by other binaries or services.

pub mod config;
pub mod converter;
pub mod error;
pub mod fetcher;
pub mod model;
pub mod pipeline;
pub mod provider;

pub use config::Config;
pub use error::FetchError;
pub use fetcher::Fetcher;
pub use model::{Country, ForecastDay, WeatherData, WeatherRecord, celsius_to_fahrenheit};
pub use provider::{ForecastProvider, metaweather::MetaWeatherProvider, provider_from_config};
