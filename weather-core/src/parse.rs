//! Reading the provider's `mode=xml` current-weather document.
//!
//! ```xml
//! <current>
//!   <temperature value="15" unit="metric"/>
//!   <humidity value="60" unit="%"/>
//!   <wind><speed value="3" name="Light breeze"/></wind>
//!   <pressure value="1012" unit="hPa"/>
//!   <clouds value="40" name="scattered clouds"/>
//! </current>
//! ```

use quick_xml::{Reader, events::Event};
use serde::Deserialize;

use crate::{
    error::{Result, WeatherError},
    model::{CurrentConditions, Described, Measurement},
    query::Units,
};

const ROOT: &[u8] = b"current";

#[derive(Debug, Deserialize)]
struct OwCurrent {
    temperature: OwValueUnit,
    humidity: OwValueUnit,
    wind: OwWind,
    pressure: OwValueUnit,
    clouds: OwValueName,
}

// Attributes the provider leaves out read as empty strings.
#[derive(Debug, Deserialize)]
struct OwValueUnit {
    #[serde(rename = "@value", default)]
    value: String,
    #[serde(rename = "@unit", default)]
    unit: String,
}

#[derive(Debug, Deserialize)]
struct OwValueName {
    #[serde(rename = "@value", default)]
    value: String,
    #[serde(rename = "@name", default)]
    name: String,
}

#[derive(Debug, Deserialize)]
struct OwWind {
    speed: OwValueName,
}

/// Parse a raw provider body into [`CurrentConditions`].
pub fn parse_report(raw: &str) -> Result<CurrentConditions> {
    ensure_current_root(raw)?;

    let parsed: OwCurrent = quick_xml::de::from_str(raw)
        .map_err(|e| WeatherError::Parse(format!("unexpected weather document: {e}")))?;

    Ok(CurrentConditions {
        temperature: Measurement {
            value: parsed.temperature.value,
            unit: temperature_unit(&parsed.temperature.unit),
        },
        humidity: Measurement { value: parsed.humidity.value, unit: parsed.humidity.unit },
        wind: Described { value: parsed.wind.speed.value, description: parsed.wind.speed.name },
        pressure: Measurement { value: parsed.pressure.value, unit: parsed.pressure.unit },
        clouds: Described { value: parsed.clouds.value, description: parsed.clouds.name },
    })
}

/// Provider unit-system tokens become unit names; the provider's own labels
/// (`celsius`, `fahrenheit`, `kelvin`) pass through untouched.
fn temperature_unit(token: &str) -> String {
    match Units::from_provider_token(token) {
        Some(units) => units.as_str().to_string(),
        None => token.to_string(),
    }
}

fn ensure_current_root(raw: &str) -> Result<()> {
    let mut reader = Reader::from_str(raw);

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) | Ok(Event::Empty(e)) => {
                if e.local_name().as_ref() == ROOT {
                    return Ok(());
                }
                let found = String::from_utf8_lossy(e.local_name().as_ref()).into_owned();
                return Err(WeatherError::Parse(format!(
                    "expected a <current> document, found <{found}>"
                )));
            }
            Ok(Event::Eof) => {
                return Err(WeatherError::Parse("document has no <current> element".into()));
            }
            Ok(_) => {}
            Err(e) => return Err(WeatherError::Parse(format!("malformed XML: {e}"))),
        }
    }
}
