//! Core library for the `current-weather` CLI.
//!
//! This crate defines:
//! - Validated weather queries (city, unit system, API key)
//! - The OpenWeather provider client and its XML report parser
//! - The report model, its text rendering and a caller-owned report store
//!
//! It is used by `weather-cli`, but [`run`] can also be called directly by
//! other binaries.

pub mod client;
pub mod config;
pub mod error;
pub mod model;
pub mod parse;
pub mod provider;
pub mod query;
pub mod render;
pub mod store;

#[cfg(test)]
mod fixtures;

pub use client::{WeatherClient, run};
pub use config::Config;
pub use error::{Result, WeatherError};
pub use model::{CurrentConditions, Described, Measurement, WeatherReport};
pub use parse::parse_report;
pub use provider::{OpenWeatherProvider, WeatherProvider};
pub use query::{Units, WeatherQuery, WeatherQueryBuilder};
pub use render::render;
pub use store::ReportStore;
