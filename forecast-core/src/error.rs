/// Why a single location could not be fetched.
///
/// Attached to that location's [`WeatherRecord`](crate::WeatherRecord); it never
/// affects any other location in the same run.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    #[error("error making request: {0}")]
    RequestConstruction(String),

    #[error("error calling client: {0}")]
    Transport(String),

    #[error("error decoding message: {0}")]
    Decode(String),

    #[error("fetch task failed: {0}")]
    Task(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_cause() {
        let err = FetchError::Decode("expected value at line 1 column 1".into());
        let msg = err.to_string();
        assert!(msg.starts_with("error decoding message"));
        assert!(msg.contains("line 1 column 1"));
    }
}
