//! Fan-out stage: one task per location id, results merged onto one channel.

use std::sync::Arc;

use tokio::{sync::mpsc, task::JoinSet};

use crate::{FetchError, WeatherRecord, provider::ForecastProvider};

/// Capacity of every stage's output channel. tokio has no zero-capacity
/// channel, so 1 is the closest to a rendezvous handoff.
pub(crate) const STAGE_CAPACITY: usize = 1;

#[derive(Debug, Clone)]
pub struct Fetcher {
    provider: Arc<dyn ForecastProvider>,
}

impl Fetcher {
    pub fn new(provider: Arc<dyn ForecastProvider>) -> Self {
        Self { provider }
    }

    /// Fetch every id concurrently and stream the records in completion order.
    ///
    /// Exactly one record is sent per input id, duplicates included. The
    /// returned receiver yields `None` only after all of them have been sent.
    /// Must be called from within a tokio runtime.
    pub fn fetch<I, S>(&self, ids: I) -> mpsc::Receiver<WeatherRecord>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let ids: Vec<String> = ids.into_iter().map(Into::into).collect();
        let (tx, rx) = mpsc::channel(STAGE_CAPACITY);
        let provider = Arc::clone(&self.provider);

        tracing::info!(count = ids.len(), "fetching forecasts");

        tokio::spawn(async move {
            let mut tasks = JoinSet::new();

            for id in ids {
                let provider = Arc::clone(&provider);
                let worker = tokio::spawn({
                    let id = id.clone();
                    async move { fetch_one(provider.as_ref(), id).await }
                });

                // A worker that panics still produces a record for its id.
                tasks.spawn(async move {
                    match worker.await {
                        Ok(record) => record,
                        Err(e) => {
                            tracing::error!(location = %id, error = %e, "fetch task failed");
                            WeatherRecord::failure(id, FetchError::Task(e.to_string()))
                        }
                    }
                });
            }

            let mut consumer_alive = true;
            while let Some(joined) = tasks.join_next().await {
                let record = match joined {
                    Ok(record) => record,
                    Err(e) => {
                        tracing::error!(error = %e, "fetch supervisor task failed");
                        continue;
                    }
                };

                // Keep draining without a consumer; started fetches are never cancelled.
                if consumer_alive && tx.send(record).await.is_err() {
                    tracing::debug!("record receiver dropped, draining remaining fetches");
                    consumer_alive = false;
                }
            }
            // `tx` drops here, closing the stream.
        });

        rx
    }
}

async fn fetch_one(provider: &dyn ForecastProvider, id: String) -> WeatherRecord {
    match provider.fetch_forecast(&id).await {
        Ok(data) => {
            tracing::debug!(location = %id, days = data.forecast.len(), "fetched forecast");
            WeatherRecord::success(id, data)
        }
        Err(error) => {
            tracing::warn!(location = %id, %error, "failed to fetch forecast");
            WeatherRecord::failure(id, error)
        }
    }
}
