// Observer Pattern: Weather-O-Rama
// A weather station broadcasts readings to registered displays.
//
// Two flavours share the same displays:
// - `push`: the station hands every observer the full `WeatherData`
// - `pull`: the station hands itself over and observers read what they need

use std::cell::RefCell;
use std::rc::Rc;

use serde::Deserialize;

pub mod display;
pub mod pull;
pub mod push;

pub use display::{CurrentConditionsDisplay, DisplayElement, ForecastDisplay, StatisticsDisplay};

#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
pub struct WeatherData {
    pub temperature: f64,
    pub humidity: f64,
    pub pressure: f64,
}

impl WeatherData {
    pub fn new(temperature: f64, humidity: f64, pressure: f64) -> Self {
        Self {
            temperature,
            humidity,
            pressure,
        }
    }
}

/// Handle returned on registration; pass it back to remove the observer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

/// Observers shared between the station and whoever reads their displays.
pub(crate) struct Registry<O: ?Sized> {
    entries: Vec<(ObserverId, Rc<RefCell<O>>)>,
    next_id: u64,
}

impl<O: ?Sized> Registry<O> {
    pub(crate) fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 0,
        }
    }

    pub(crate) fn register(&mut self, observer: Rc<RefCell<O>>) -> ObserverId {
        let id = ObserverId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, observer));
        tracing::debug!(?id, total = self.entries.len(), "observer registered");
        id
    }

    pub(crate) fn remove(&mut self, id: ObserverId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        let removed = self.entries.len() != before;
        tracing::debug!(?id, removed, total = self.entries.len(), "observer removal");
        removed
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = &Rc<RefCell<O>>> {
        self.entries.iter().map(|(_, observer)| observer)
    }
}
