pub(crate) const SAMPLE: &str = r#"<current><temperature value="15" unit="metric"/><humidity value="60" unit="%"/><wind><speed value="3" name="Light breeze"/></wind><pressure value="1012" unit="hPa"/><clouds value="40" name="scattered clouds"/></current>"#;

pub(crate) fn sample_report(city_name: &str) -> crate::WeatherReport {
    let conditions = crate::parse::parse_report(SAMPLE).expect("fixture parses");
    crate::WeatherReport::new(city_name, conditions)
}
