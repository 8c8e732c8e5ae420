use async_trait::async_trait;
use reqwest::{Client, Url};
use tracing::{debug, warn};

use crate::{
    config::DEFAULT_BASE_URL,
    error::{Result, WeatherError},
    query::WeatherQuery,
};

use super::WeatherProvider;

const DATA_PATH: &str = "/data/2.5/weather";

#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    base_url: String,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, http: Client::new() }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `<base>/data/2.5/weather?q=<city>&appid=<key>&mode=xml&units=<token>`
    pub fn request_url(&self, query: &WeatherQuery) -> Result<Url> {
        Url::parse_with_params(
            &format!("{}{DATA_PATH}", self.base_url),
            &[
                ("q", query.city_name()),
                ("appid", query.api_key()),
                ("mode", "xml"),
                ("units", query.units().provider_token()),
            ],
        )
        .map_err(|e| WeatherError::Config(format!("Invalid provider URL '{}': {e}", self.base_url)))
    }
}

impl Default for OpenWeatherProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn fetch_current_xml(&self, query: &WeatherQuery) -> Result<String> {
        let url = self.request_url(query)?;
        debug!(
            base_url = %self.base_url,
            city = query.city_name(),
            units = %query.units(),
            "requesting current weather"
        );

        // Errors carry the request URL, and with it the API key.
        let res = self.http.get(url).send().await.map_err(|e| {
            let e = e.without_url();
            warn!(error = %e, "OpenWeather request could not be sent");
            WeatherError::Network(format!("Failed to send request to OpenWeather: {e}"))
        })?;

        let status = res.status();
        let body = res.text().await.map_err(|e| {
            WeatherError::Network(format!(
                "Failed to read OpenWeather response body: {}",
                e.without_url()
            ))
        })?;

        if !status.is_success() {
            warn!(%status, city = query.city_name(), "OpenWeather returned an error status");
            return Err(WeatherError::Network(format!(
                "OpenWeather request failed with status {}: {}",
                status,
                truncate_body(&body),
            )));
        }

        debug!(bytes = body.len(), "received current weather document");
        Ok(body)
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() <= MAX {
        return body.to_string();
    }

    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &body[..end])
}
