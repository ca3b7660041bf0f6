// Scenario configuration for the demo runner.
// All sections are optional; missing ones fall back to the textbook scenario.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::decorator::{BeverageKind, CondimentKind, Order};
use crate::error::{PatternError, Result};
use crate::observer::WeatherData;
use crate::strategy::{Duck, DuckKind, FlyKind};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub orders: Vec<Order>,
    pub weather: WeatherConfig,
    pub ducks: Vec<DuckConfig>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeatherMode {
    #[default]
    Push,
    Pull,
}

impl fmt::Display for WeatherMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WeatherMode::Push => f.write_str("push"),
            WeatherMode::Pull => f.write_str("pull"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct WeatherConfig {
    pub mode: WeatherMode,
    pub readings: Vec<WeatherData>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct DuckConfig {
    pub kind: DuckKind,
    /// Replaces the duck's default behaviour after construction.
    #[serde(default)]
    pub fly: Option<FlyKind>,
}

impl DuckConfig {
    pub fn build(&self) -> Duck {
        let mut duck = Duck::new(self.kind);
        if let Some(fly) = self.fly {
            duck.set_fly_behaviour(fly.behaviour());
        }
        duck
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            orders: vec![
                Order::new(
                    BeverageKind::DarkRoast,
                    vec![CondimentKind::Mocha, CondimentKind::Whip],
                ),
                Order::new(BeverageKind::HouseBlend, vec![CondimentKind::SteamedMilk]),
                Order::new(BeverageKind::DarkRoast, vec![CondimentKind::Mocha]),
            ],
            weather: WeatherConfig::default(),
            ducks: vec![
                DuckConfig { kind: DuckKind::Mallard, fly: None },
                DuckConfig { kind: DuckKind::Redhead, fly: None },
                DuckConfig { kind: DuckKind::Rubber, fly: None },
                DuckConfig { kind: DuckKind::Wooden, fly: None },
                DuckConfig { kind: DuckKind::Wooden, fly: Some(FlyKind::Wings) },
            ],
        }
    }
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            mode: WeatherMode::Push,
            readings: vec![
                WeatherData::new(20.0, 65.0, 1012.0),
                WeatherData::new(30.0, 70.0, 1015.0),
                WeatherData::new(25.0, 60.0, 1010.0),
            ],
        }
    }
}

impl DemoConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: DemoConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        tracing::debug!(path = %path.display(), "loaded scenario config");
        Self::from_toml_str(&content)
    }

    /// Checks every weather reading, reporting the first bad field.
    pub fn validate(&self) -> Result<()> {
        self.weather.readings.iter().try_for_each(validate_reading)
    }
}

fn validate_reading(reading: &WeatherData) -> Result<()> {
    let fields = [
        ("temperature", reading.temperature),
        ("humidity", reading.humidity),
        ("pressure", reading.pressure),
    ];
    for (field, value) in fields {
        if !value.is_finite() {
            return Err(PatternError::invalid_reading(field, value, "must be a finite number"));
        }
    }
    if !(0.0..=100.0).contains(&reading.humidity) {
        return Err(PatternError::invalid_reading(
            "humidity",
            reading.humidity,
            "must be between 0 and 100",
        ));
    }
    if reading.pressure <= 0.0 {
        return Err(PatternError::invalid_reading(
            "pressure",
            reading.pressure,
            "must be positive",
        ));
    }
    Ok(())
}
