use serde::{Deserialize, Serialize};

/// A provider value with its unit, e.g. `1012` `hPa`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Measurement {
    pub value: String,
    pub unit: String,
}

/// A provider value with its textual meaning, e.g. `3` `Light breeze`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Described {
    pub value: String,
    pub description: String,
}

/// The five attributes read from one `current` document. Values are kept
/// exactly as the provider sent them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentConditions {
    pub temperature: Measurement,
    pub humidity: Measurement,
    pub wind: Described,
    pub pressure: Measurement,
    pub clouds: Described,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherReport {
    pub city_name: String,
    pub conditions: CurrentConditions,
}

impl WeatherReport {
    pub fn new(city_name: impl Into<String>, conditions: CurrentConditions) -> Self {
        Self { city_name: city_name.into(), conditions }
    }
}
