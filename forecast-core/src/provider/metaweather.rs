use async_trait::async_trait;
use reqwest::Client;

use crate::{FetchError, WeatherData};

use super::ForecastProvider;

/// Fetches `<base_url>/<id>/` and decodes the body as [`WeatherData`].
#[derive(Debug, Clone)]
pub struct MetaWeatherProvider {
    base_url: String,
    http: Client,
}

impl MetaWeatherProvider {
    pub fn new(base_url: String) -> Self {
        Self::with_client(base_url, Client::new())
    }

    /// Use a preconfigured client, e.g. one with a timeout.
    pub fn with_client(base_url: String, http: Client) -> Self {
        Self { base_url, http }
    }

    pub fn endpoint(&self, id: &str) -> String {
        format!("{}/{}/", self.base_url.trim_end_matches('/'), id)
    }
}

#[async_trait]
impl ForecastProvider for MetaWeatherProvider {
    async fn fetch_forecast(&self, id: &str) -> Result<WeatherData, FetchError> {
        let url = self.endpoint(id);

        let request = self
            .http
            .get(&url)
            .build()
            .map_err(|e| FetchError::RequestConstruction(e.to_string()))?;

        tracing::debug!(location = id, %url, "sending forecast request");

        let res = self
            .http
            .execute(request)
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        // Non-2xx bodies are decoded like any other and usually fail as Decode.
        let status = res.status();
        if !status.is_success() {
            tracing::debug!(location = id, %status, "forecast endpoint returned non-success status");
        }

        let body = res.bytes().await.map_err(|e| FetchError::Transport(e.to_string()))?;

        serde_json::from_slice(&body).map_err(|e| FetchError::Decode(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_appends_id_with_trailing_slash() {
        let p = MetaWeatherProvider::new("https://www.metaweather.com/api/location".into());
        assert_eq!(p.endpoint("44418"), "https://www.metaweather.com/api/location/44418/");
    }

    #[test]
    fn endpoint_tolerates_trailing_slash_on_base() {
        let p = MetaWeatherProvider::new("http://localhost/api/location/".into());
        assert_eq!(p.endpoint("4118"), "http://localhost/api/location/4118/");
    }

    #[tokio::test]
    async fn unparsable_url_is_request_construction_error() {
        let p = MetaWeatherProvider::new("not a url".into());
        let err = p.fetch_forecast("44418").await.unwrap_err();

        assert!(matches!(err, FetchError::RequestConstruction(_)), "got {err:?}");
    }

    #[tokio::test]
    async fn refused_connection_is_transport_error() {
        // Port 1 is reserved and nothing listens there in test environments.
        let p = MetaWeatherProvider::new("http://127.0.0.1:1/api/location".into());
        let err = p.fetch_forecast("44418").await.unwrap_err();

        assert!(matches!(err, FetchError::Transport(_)), "got {err:?}");
    }
}
