// Demo runners: each one plays a scenario and returns the lines it would print.

use std::cell::RefCell;
use std::rc::Rc;

use crate::config::{DemoConfig, DuckConfig, WeatherConfig, WeatherMode};
use crate::decorator::Order;
use crate::observer::{
    pull, push, CurrentConditionsDisplay, DisplayElement, ForecastDisplay, StatisticsDisplay,
    WeatherData,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Demo {
    Decorator,
    Observer,
    Strategy,
}

impl Demo {
    pub const ALL: [Demo; 3] = [Demo::Decorator, Demo::Observer, Demo::Strategy];

    pub fn title(self) -> &'static str {
        match self {
            Demo::Decorator => "StarBuzz Coffee (Decorator)",
            Demo::Observer => "Weather-O-Rama (Observer)",
            Demo::Strategy => "SimUDuck (Strategy)",
        }
    }

    pub fn run(self, config: &DemoConfig) -> Vec<String> {
        tracing::info!(demo = self.title(), "running demo");
        match self {
            Demo::Decorator => run_decorator(&config.orders),
            Demo::Observer => run_observer(&config.weather),
            Demo::Strategy => run_strategy(&config.ducks),
        }
    }
}

pub fn run_decorator(orders: &[Order]) -> Vec<String> {
    orders
        .iter()
        .map(|order| {
            let drink = order.brew();
            format!("{} {}", drink.description(), drink.cost())
        })
        .collect()
}

pub fn run_observer(weather: &WeatherConfig) -> Vec<String> {
    match weather.mode {
        WeatherMode::Push => run_push(&weather.readings),
        WeatherMode::Pull => run_pull(&weather.readings),
    }
}

fn reading_line(index: usize, reading: &WeatherData) -> String {
    format!(
        "Reading {}: {}°C, {}% humidity, {} hPa",
        index + 1,
        reading.temperature,
        reading.humidity,
        reading.pressure
    )
}

fn run_push(readings: &[WeatherData]) -> Vec<String> {
    let mut station = push::WeatherStation::new();
    let displays: [SharedDisplay; 3] = [
        station.attach(CurrentConditionsDisplay::new()),
        station.attach(StatisticsDisplay::new()),
        station.attach(ForecastDisplay::new()),
    ];
    play_readings(readings, &displays, |reading| {
        station.set_measurements(reading.temperature, reading.humidity, reading.pressure)
    })
}

fn run_pull(readings: &[WeatherData]) -> Vec<String> {
    let mut station = pull::WeatherStation::new();
    let displays: [SharedDisplay; 3] = [
        station.attach(CurrentConditionsDisplay::new()),
        station.attach(StatisticsDisplay::new()),
        station.attach(ForecastDisplay::new()),
    ];
    play_readings(readings, &displays, |reading| {
        station.set_measurements(reading.temperature, reading.humidity, reading.pressure)
    })
}

type SharedDisplay = Rc<RefCell<dyn DisplayElement>>;

/// Publishes each reading, then renders every display under it.
fn play_readings(
    readings: &[WeatherData],
    displays: &[SharedDisplay],
    mut publish: impl FnMut(&WeatherData),
) -> Vec<String> {
    let mut lines = Vec::with_capacity(readings.len() * (displays.len() + 1));
    for (index, reading) in readings.iter().enumerate() {
        publish(reading);
        lines.push(reading_line(index, reading));
        lines.extend(
            displays
                .iter()
                .map(|display| format!("  {}", display.borrow().display())),
        );
    }
    lines
}

pub fn run_strategy(ducks: &[DuckConfig]) -> Vec<String> {
    ducks
        .iter()
        .map(|entry| {
            let duck = entry.build();
            format!("{}: {}", duck.display(), duck.perform_fly())
        })
        .collect()
}
