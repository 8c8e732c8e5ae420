use std::{convert::TryFrom, fmt};

use crate::error::{Result, WeatherError};

/// Temperature unit system requested from the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Units {
    Kelvin,
    #[default]
    Celsius,
    Fahrenheit,
}

impl Units {
    pub fn as_str(&self) -> &'static str {
        match self {
            Units::Kelvin => "kelvin",
            Units::Celsius => "celsius",
            Units::Fahrenheit => "fahrenheit",
        }
    }

    /// Value sent as the `units` query parameter. Kelvin is the provider default.
    pub fn provider_token(&self) -> &'static str {
        match self {
            Units::Kelvin => "",
            Units::Celsius => "metric",
            Units::Fahrenheit => "imperial",
        }
    }

    pub fn from_provider_token(token: &str) -> Option<Units> {
        Units::all().iter().copied().find(|u| u.provider_token() == token)
    }

    pub const fn all() -> &'static [Units] {
        &[Units::Kelvin, Units::Celsius, Units::Fahrenheit]
    }
}

impl fmt::Display for Units {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Units {
    type Error = WeatherError;

    fn try_from(value: &str) -> std::result::Result<Self, Self::Error> {
        let lower = value.to_lowercase();

        match lower.as_str() {
            "kelvin" => Ok(Units::Kelvin),
            "celsius" => Ok(Units::Celsius),
            "fahrenheit" => Ok(Units::Fahrenheit),
            _ => Err(WeatherError::validation(
                "temperature units",
                format!("'{value}' is not supported, enter only kelvin, celsius or fahrenheit"),
            )),
        }
    }
}

/// A validated request for the current weather of one city.
#[derive(Clone, PartialEq, Eq)]
pub struct WeatherQuery {
    city_name: String,
    units: Units,
    api_key: String,
}

impl WeatherQuery {
    pub fn builder() -> WeatherQueryBuilder {
        WeatherQueryBuilder::default()
    }

    pub fn new(
        city_name: impl Into<String>,
        units: &str,
        api_key: impl Into<String>,
    ) -> Result<Self> {
        Self::builder().city(city_name)?.units(units)?.api_key(api_key)?.build()
    }

    pub fn city_name(&self) -> &str {
        &self.city_name
    }

    pub fn units(&self) -> Units {
        self.units
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }
}

impl fmt::Debug for WeatherQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeatherQuery")
            .field("city_name", &self.city_name)
            .field("units", &self.units)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

/// Collects and validates the parts of a [`WeatherQuery`] one at a time.
#[derive(Default)]
pub struct WeatherQueryBuilder {
    city_name: Option<String>,
    units: Option<Units>,
    api_key: Option<String>,
}

impl WeatherQueryBuilder {
    /// Multi-word names such as "tel aviv" are kept as given.
    pub fn city(mut self, name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(WeatherError::validation(
                "city name",
                "enter a non-empty name; separate multi-word names with spaces",
            ));
        }

        self.city_name = Some(name);
        Ok(self)
    }

    pub fn units(mut self, value: &str) -> Result<Self> {
        self.units = Some(Units::try_from(value)?);
        Ok(self)
    }

    pub fn unit_system(mut self, units: Units) -> Self {
        self.units = Some(units);
        self
    }

    pub fn api_key(mut self, key: impl Into<String>) -> Result<Self> {
        let key = key.into();
        if key.trim().is_empty() {
            return Err(missing_api_key());
        }

        self.api_key = Some(key);
        Ok(self)
    }

    pub fn build(self) -> Result<WeatherQuery> {
        let city_name = self
            .city_name
            .ok_or_else(|| WeatherError::validation("city name", "no city name was set"))?;
        let units = self
            .units
            .ok_or_else(|| WeatherError::validation("temperature units", "no units were set"))?;
        let api_key = self.api_key.ok_or_else(missing_api_key)?;

        Ok(WeatherQuery { city_name, units, api_key })
    }
}

impl fmt::Debug for WeatherQueryBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeatherQueryBuilder")
            .field("city_name", &self.city_name)
            .field("units", &self.units)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

fn missing_api_key() -> WeatherError {
    WeatherError::validation(
        "api key",
        "no value was entered; sign up at https://openweathermap.org/appid to get one",
    )
}
