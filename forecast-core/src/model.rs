use serde::{Deserialize, Serialize};

use crate::error::FetchError;

/// Country (or region) a location belongs to, taken from the `parent` object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Country {
    #[serde(rename = "title")]
    pub name: String,
}

/// One entry of `consolidated_weather`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastDay {
    #[serde(rename = "weather_state_name")]
    pub condition: String,

    /// Kept exactly as the API sends it, e.g. "2026-10-15".
    #[serde(rename = "applicable_date")]
    pub date: String,

    pub min_temp: f64,
    pub max_temp: f64,
}

/// Decoded body of `GET <base-url>/<id>/`.
///
/// Temperatures are Celsius as received and Fahrenheit once
/// [`WeatherData::convert_to_fahrenheit`] has run. Nothing records which.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherData {
    #[serde(rename = "parent")]
    pub country: Country,

    #[serde(rename = "title")]
    pub city: String,

    #[serde(rename = "consolidated_weather")]
    pub forecast: Vec<ForecastDay>,
}

impl WeatherData {
    /// Rewrite every day's min/max from Celsius to Fahrenheit in place.
    ///
    /// Not idempotent: calling this twice converts twice.
    pub fn convert_to_fahrenheit(&mut self) {
        for day in &mut self.forecast {
            day.min_temp = celsius_to_fahrenheit(day.min_temp);
            day.max_temp = celsius_to_fahrenheit(day.max_temp);
        }
    }
}

pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    celsius * 1.8 + 32.0
}

/// Outcome of fetching a single location identifier.
#[derive(Debug, Clone, PartialEq)]
pub enum WeatherRecord {
    Success { id: String, data: WeatherData },
    Failure { id: String, error: FetchError },
}

impl WeatherRecord {
    pub fn success(id: impl Into<String>, data: WeatherData) -> Self {
        Self::Success { id: id.into(), data }
    }

    pub fn failure(id: impl Into<String>, error: FetchError) -> Self {
        Self::Failure { id: id.into(), error }
    }

    /// The identifier this record was requested for.
    pub fn id(&self) -> &str {
        match self {
            Self::Success { id, .. } | Self::Failure { id, .. } => id,
        }
    }

    pub fn data(&self) -> Option<&WeatherData> {
        match self {
            Self::Success { data, .. } => Some(data),
            Self::Failure { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&FetchError> {
        match self {
            Self::Success { .. } => None,
            Self::Failure { error, .. } => Some(error),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}
