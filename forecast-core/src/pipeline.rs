use tokio::sync::mpsc;

use crate::{Fetcher, WeatherRecord, converter};

/// Fetch `ids` and convert the results: the full Fetcher → Converter chain.
pub fn forecast_stream<I, S>(fetcher: &Fetcher, ids: I) -> mpsc::Receiver<WeatherRecord>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    converter::convert(fetcher.fetch(ids))
}

/// Drain a record stream until it closes.
pub async fn collect(mut records: mpsc::Receiver<WeatherRecord>) -> Vec<WeatherRecord> {
    let mut out = Vec::new();
    while let Some(record) = records.recv().await {
        out.push(record);
    }
    out
}
