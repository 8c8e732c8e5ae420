use std::fmt;

use crate::model::WeatherReport;

/// Human-readable report text, one attribute per line.
pub fn render(report: &WeatherReport) -> String {
    report.to_string()
}

impl fmt::Display for WeatherReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = &self.conditions;

        writeln!(f, "Weather report for {}:", self.city_name)?;
        writeln!(f, "Temperature is at {} {}", c.temperature.value, c.temperature.unit)?;
        writeln!(f, "Humidity is {}{}", c.humidity.value, c.humidity.unit)?;
        writeln!(
            f,
            "Wind is at {} speed meaning {}",
            c.wind.value,
            c.wind.description.to_lowercase()
        )?;
        writeln!(f, "Air pressure is {} {}", c.pressure.value, c.pressure.unit)?;
        writeln!(
            f,
            "Clouds coverage is {}% meaning {}",
            c.clouds.value,
            c.clouds.description.to_lowercase()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::sample_report;

    #[test]
    fn renders_sample_report() {
        let text = render(&sample_report("tel aviv"));

        let expected = "Weather report for tel aviv:\n\
                        Temperature is at 15 celsius\n\
                        Humidity is 60%\n\
                        Wind is at 3 speed meaning light breeze\n\
                        Air pressure is 1012 hPa\n\
                        Clouds coverage is 40% meaning scattered clouds\n";
        assert_eq!(text, expected);
    }

    #[test]
    fn only_descriptions_are_lower_cased() {
        let mut report = sample_report("Tel Aviv");
        report.conditions.clouds.description = "Overcast Clouds".into();

        let text = render(&report);

        assert!(text.starts_with("Weather report for Tel Aviv:\n"));
        assert!(text.contains("meaning overcast clouds"));
        assert!(text.contains("1012 hPa"));
        assert!(!text.contains("Light breeze"));
    }
}
