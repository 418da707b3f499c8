//! Human-readable rendering of pipeline output.

use forecast_core::WeatherRecord;

const SEPARATOR: &str = "\n#######################\n\n";

pub fn header(count: usize) -> String {
    format!("Gathering weather information for {count} cities\n{SEPARATOR}")
}

/// One block per location. Temperatures are expected to be Fahrenheit already.
pub fn render_record(record: &WeatherRecord) -> String {
    match record {
        WeatherRecord::Failure { id, error } => {
            format!("Error fetching weather data for city id: {id} ({error})\n")
        }
        WeatherRecord::Success { data, .. } => {
            let mut out = format!("Weather Forecast for {}, {}\n", data.city, data.country.name);
            for day in &data.forecast {
                out.push_str(&format!("\tDate: {}\n", day.date));
                out.push_str(&format!(
                    "\t\t{}, High of {:.2}℉, Low of {:.2}℉\n\n",
                    day.condition, day.max_temp, day.min_temp
                ));
            }
            out.push_str(SEPARATOR);
            out
        }
    }
}

pub fn footer() -> &'static str {
    "Data fetch complete!"
}

#[cfg(test)]
mod tests {
    use super::*;
    use forecast_core::{Country, FetchError, ForecastDay, WeatherData};

    #[test]
    fn renders_success_block() {
        let record = WeatherRecord::success(
            "44418",
            WeatherData {
                country: Country { name: "England".into() },
                city: "London".into(),
                forecast: vec![ForecastDay {
                    condition: "Showers".into(),
                    date: "2026-10-15".into(),
                    min_temp: 50.0,
                    max_temp: 68.0,
                }],
            },
        );

        let out = render_record(&record);
        assert!(out.starts_with("Weather Forecast for London, England\n"));
        assert!(out.contains("\tDate: 2026-10-15\n"));
        assert!(out.contains("\t\tShowers, High of 68.00℉, Low of 50.00℉"));
        assert!(out.ends_with(SEPARATOR));
    }

    #[test]
    fn renders_failure_on_one_line() {
        let record = WeatherRecord::failure("4118", FetchError::Transport("timed out".into()));
        let out = render_record(&record);

        assert_eq!(out.lines().count(), 1);
        assert!(out.contains("city id: 4118"));
        assert!(out.contains("timed out"));
    }

    #[test]
    fn header_mentions_count() {
        assert!(header(10).starts_with("Gathering weather information for 10 cities"));
    }
}
