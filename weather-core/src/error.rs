use std::path::PathBuf;

use thiserror::Error;

/// Every way a weather query can fail.
#[derive(Debug, Error)]
pub enum WeatherError {
    /// Bad city name, units or API key. Raised before any I/O happens.
    #[error("Invalid {field}: {reason}")]
    Validation { field: &'static str, reason: String },

    /// Connection failure or non-success HTTP status from the provider.
    #[error("Weather request failed: {0}")]
    Network(String),

    /// The raw-response dump could not be written.
    #[error("File operations on {} failed with error: {source}", path.display())]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The provider returned XML without the expected elements.
    #[error("Parsing weather data failed: {0}")]
    Parse(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl WeatherError {
    pub(crate) fn validation(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Validation { field, reason: reason.into() }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }
}

pub type Result<T> = std::result::Result<T, WeatherError>;
