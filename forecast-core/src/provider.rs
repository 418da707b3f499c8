use crate::{Config, FetchError, WeatherData, provider::metaweather::MetaWeatherProvider};
use async_trait::async_trait;
use std::{fmt::Debug, sync::Arc};

pub mod metaweather;

/// Source of forecast data for a single location id.
///
/// The [`Fetcher`](crate::Fetcher) calls this once per requested id, each from
/// its own task.
#[async_trait]
pub trait ForecastProvider: Send + Sync + Debug {
    async fn fetch_forecast(&self, id: &str) -> Result<WeatherData, FetchError>;
}

/// Construct the HTTP provider from config.
pub fn provider_from_config(config: &Config) -> Arc<dyn ForecastProvider> {
    Arc::new(MetaWeatherProvider::new(config.base_url.clone()))
}
