use std::{
    fs,
    path::{Path, PathBuf},
};

use tracing::{debug, info};

use crate::{
    config::Config,
    error::{Result, WeatherError},
    model::WeatherReport,
    parse::parse_report,
    provider::{OpenWeatherProvider, WeatherProvider},
    query::WeatherQuery,
    store::ReportStore,
};

/// Runs the fetch, parse and report steps for validated queries.
#[derive(Debug)]
pub struct WeatherClient {
    provider: Box<dyn WeatherProvider>,
    dump_path: Option<PathBuf>,
}

impl WeatherClient {
    pub fn new(provider: Box<dyn WeatherProvider>) -> Self {
        Self { provider, dump_path: None }
    }

    pub fn from_config(config: &Config) -> Self {
        let provider = OpenWeatherProvider::with_base_url(config.base_url());
        let client = Self::new(Box::new(provider));

        match &config.dump_path {
            Some(path) => client.with_dump(path),
            None => client,
        }
    }

    /// Write every raw response to `path`, replacing the previous one.
    pub fn with_dump(mut self, path: impl Into<PathBuf>) -> Self {
        self.dump_path = Some(path.into());
        self
    }

    pub fn dump_path(&self) -> Option<&Path> {
        self.dump_path.as_deref()
    }

    /// Raw provider body for `query`.
    pub async fn fetch_report(&self, query: &WeatherQuery) -> Result<String> {
        let raw = self.provider.fetch_current_xml(query).await?;

        if let Some(path) = &self.dump_path {
            fs::write(path, raw.as_bytes())
                .map_err(|source| WeatherError::File { path: path.clone(), source })?;
            debug!(path = %path.display(), "wrote raw weather response");
        }

        Ok(raw)
    }

    pub async fn report(&self, query: &WeatherQuery) -> Result<WeatherReport> {
        let raw = self.fetch_report(query).await?;
        let conditions = parse_report(&raw)?;

        info!(city = query.city_name(), units = %query.units(), "weather report ready");
        Ok(WeatherReport::new(query.city_name(), conditions))
    }

    /// Fetch a fresh report into `store`. The store is untouched on failure.
    pub async fn refresh<'s>(
        &self,
        store: &'s mut ReportStore,
        query: &WeatherQuery,
    ) -> Result<&'s WeatherReport> {
        let report = self.report(query).await?;
        Ok(store.upsert(report))
    }
}

/// Fetch, parse and print the current weather for one city.
///
/// Invalid input is reported before any request is made; any later failure
/// stops the sequence without printing a report.
pub async fn run(city_name: &str, units: &str, api_key: &str) -> Result<()> {
    let query = WeatherQuery::new(city_name, units, api_key)?;
    let config = Config::load()?;
    let client = WeatherClient::from_config(&config);

    let report = client.report(&query).await?;
    print!("{report}");

    Ok(())
}
