use std::io::Write;

use design_patterns::config::WeatherMode;
use design_patterns::{Demo, DemoConfig, PatternError};
use tempfile::NamedTempFile;

fn write_scenario(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_scenario_file_drives_all_demos() {
    let file = write_scenario(
        r#"
[[orders]]
beverage = "house-blend"
condiments = ["mocha", "mocha", "whip"]

[weather]
mode = "pull"
readings = [
    { temperature = 30, humidity = 70, pressure = 1012 },
    { temperature = -2.5, humidity = 90, pressure = 1012 },
]

[[ducks]]
kind = "mallard"
fly = "no-way"
"#,
    );

    let config = DemoConfig::from_file(file.path()).unwrap();
    assert_eq!(config.weather.mode, WeatherMode::Pull);

    assert_eq!(
        Demo::Decorator.run(&config),
        vec!["Whipped Mocha Mocha House Blend $1.39"]
    );

    let weather = Demo::Observer.run(&config);
    assert_eq!(weather[1], "  Current conditions: 30°C and 70% humidity");
    assert_eq!(weather[5], "  Current conditions: -2.5°C and 90% humidity");
    assert_eq!(weather[6], "  Avg/Max/Min temperature = 13.8/30/-2.5");
    assert_eq!(weather[7], "  Forecast: More of the same");

    assert_eq!(Demo::Strategy.run(&config), vec!["MallardDuck: Can't fly"]);
}

#[test]
fn test_partial_scenario_keeps_other_defaults() {
    let file = write_scenario(
        r#"
[[ducks]]
kind = "wooden"
"#,
    );

    let config = DemoConfig::from_file(file.path()).unwrap();
    let defaults = DemoConfig::default();
    assert_eq!(config.orders, defaults.orders);
    assert_eq!(config.weather, defaults.weather);
    assert_eq!(config.ducks.len(), 1);
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = DemoConfig::from_file(dir.path().join("missing.toml")).unwrap_err();
    assert!(matches!(err, PatternError::Io(_)));
}

#[test]
fn test_unknown_duck_is_reported() {
    let file = write_scenario(
        r#"
[[ducks]]
kind = "goose"
"#,
    );

    let err = DemoConfig::from_file(file.path()).unwrap_err();
    assert!(matches!(err, PatternError::ConfigParse(_)));
    assert!(err.to_string().contains("Unknown duck 'goose'"));
}

#[test]
fn test_invalid_reading_is_rejected() {
    let file = write_scenario(
        r#"
[weather]
readings = [{ temperature = 20, humidity = 50, pressure = -1 }]
"#,
    );

    let err = DemoConfig::from_file(file.path()).unwrap_err();
    assert!(matches!(err, PatternError::InvalidReading { field: "pressure", .. }));
}
