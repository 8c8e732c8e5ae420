use clap::Parser;
use weather_core::WeatherError;

/// Current weather report for a city, from openweathermap.org.
#[derive(Debug, Parser)]
#[command(
    name = "current-weather",
    version,
    about = "Current city weather report",
    after_help = "Example:\n  current-weather \"tel aviv\" celsius <api_key>"
)]
pub struct Cli {
    /// City name; quote names of more than one word.
    pub city_name: String,

    /// Temperature units.
    #[arg(value_parser = ["kelvin", "celsius", "fahrenheit"])]
    pub temp_units: String,

    /// API key you get when signing in to the openweathermap site.
    pub api_key: String,
}

impl Cli {
    pub async fn run(self) -> Result<(), WeatherError> {
        weather_core::run(&self.city_name, &self.temp_units, &self.api_key).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_three_positionals() {
        let cli = Cli::try_parse_from(["current-weather", "tel aviv", "celsius", "KEY"]).unwrap();

        assert_eq!(cli.city_name, "tel aviv");
        assert_eq!(cli.temp_units, "celsius");
        assert_eq!(cli.api_key, "KEY");
    }

    #[test]
    fn rejects_unknown_units() {
        let err = Cli::try_parse_from(["current-weather", "paris", "rankine", "KEY"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::InvalidValue);
    }

    #[test]
    fn requires_api_key() {
        let err = Cli::try_parse_from(["current-weather", "paris", "kelvin"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }
}
