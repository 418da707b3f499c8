//! Transform stage: Celsius to Fahrenheit on every successful record.

use tokio::sync::mpsc;

use crate::{WeatherRecord, fetcher::STAGE_CAPACITY};

/// Convert each record once and forward it in arrival order.
///
/// Failed records pass through untouched. The returned stream closes after
/// `input` is closed and drained.
pub fn convert(mut input: mpsc::Receiver<WeatherRecord>) -> mpsc::Receiver<WeatherRecord> {
    let (tx, rx) = mpsc::channel(STAGE_CAPACITY);

    tokio::spawn(async move {
        while let Some(mut record) = input.recv().await {
            if let WeatherRecord::Success { data, .. } = &mut record {
                data.convert_to_fahrenheit();
            }

            if tx.send(record).await.is_err() {
                tracing::debug!("converted record receiver dropped");
                break;
            }
        }
    });

    rx
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Country, FetchError, WeatherData, fetcher::tests::day};

    fn record(id: &str, days: Vec<crate::ForecastDay>) -> WeatherRecord {
        WeatherRecord::success(
            id,
            WeatherData { country: Country { name: "C".into() }, city: id.into(), forecast: days },
        )
    }

    async fn run(records: Vec<WeatherRecord>) -> Vec<WeatherRecord> {
        let (tx, rx) = mpsc::channel(1);
        let mut out = convert(rx);

        tokio::spawn(async move {
            for r in records {
                if tx.send(r).await.is_err() {
                    break;
                }
            }
        });

        let mut collected = Vec::new();
        while let Some(r) = out.recv().await {
            collected.push(r);
        }
        collected
    }

    #[tokio::test]
    async fn converts_each_day_exactly_once() {
        let out = run(vec![record("a", vec![day(0.0, 100.0), day(-40.0, 10.0)])]).await;

        let data = out[0].data().expect("success");
        assert!((data.forecast[0].min_temp - 32.0).abs() < 1e-9);
        assert!((data.forecast[0].max_temp - 212.0).abs() < 1e-9);
        assert!((data.forecast[1].min_temp - -40.0).abs() < 1e-9);
        assert!((data.forecast[1].max_temp - 50.0).abs() < 1e-9);
    }

    #[tokio::test]
    async fn preserves_arrival_order() {
        let out = run(vec![
            record("c", vec![]),
            WeatherRecord::failure("a", FetchError::Decode("bad".into())),
            record("b", vec![day(1.0, 2.0)]),
        ])
        .await;

        let ids: Vec<&str> = out.iter().map(WeatherRecord::id).collect();
        assert_eq!(ids, vec!["c", "a", "b"]);
    }

    #[tokio::test]
    async fn failures_pass_through_unchanged() {
        let failed = WeatherRecord::failure("x", FetchError::Transport("refused".into()));
        let out = run(vec![failed.clone()]).await;

        assert_eq!(out, vec![failed]);
    }

    #[tokio::test]
    async fn closes_when_input_closes() {
        let out = run(Vec::new()).await;
        assert!(out.is_empty());
    }
}
