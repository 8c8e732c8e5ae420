use async_trait::async_trait;
use std::fmt::Debug;

use crate::{error::Result, query::WeatherQuery};

pub mod openweather;

pub use openweather::OpenWeatherProvider;

/// Source of raw current-weather documents.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    /// Returns the provider's XML body for `query`, unparsed.
    async fn fetch_current_xml(&self, query: &WeatherQuery) -> Result<String>;
}
