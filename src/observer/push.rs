//! Push model: every observer receives the full reading.

use std::cell::RefCell;
use std::rc::Rc;

use super::display::{CurrentConditionsDisplay, ForecastDisplay, StatisticsDisplay};
use super::{ObserverId, Registry, WeatherData};

#[cfg_attr(test, mockall::automock)]
pub trait Observer {
    fn update(&mut self, data: &WeatherData);
}

pub type SharedObserver = Rc<RefCell<dyn Observer>>;

pub struct WeatherStation {
    observers: Registry<dyn Observer>,
    data: WeatherData,
}

impl Default for WeatherStation {
    fn default() -> Self {
        Self::new()
    }
}

impl WeatherStation {
    pub fn new() -> Self {
        Self {
            observers: Registry::new(),
            data: WeatherData::default(),
        }
    }

    pub fn register_observer(&mut self, observer: SharedObserver) -> ObserverId {
        self.observers.register(observer)
    }

    /// Wraps `observer` for sharing, registers it and hands back the shared handle.
    pub fn attach<O: Observer + 'static>(&mut self, observer: O) -> Rc<RefCell<O>> {
        let shared = Rc::new(RefCell::new(observer));
        self.observers.register(shared.clone());
        shared
    }

    pub fn remove_observer(&mut self, id: ObserverId) -> bool {
        self.observers.remove(id)
    }

    pub fn notify_observers(&self) {
        tracing::debug!(observers = self.observers.len(), data = ?self.data, "push notify");
        for observer in self.observers.iter() {
            observer.borrow_mut().update(&self.data);
        }
    }

    pub fn set_measurements(&mut self, temperature: f64, humidity: f64, pressure: f64) {
        self.data = WeatherData::new(temperature, humidity, pressure);
        self.notify_observers();
    }

    pub fn measurements(&self) -> WeatherData {
        self.data
    }

    pub fn observers_count(&self) -> usize {
        self.observers.len()
    }
}

impl Observer for CurrentConditionsDisplay {
    fn update(&mut self, data: &WeatherData) {
        self.record(data.temperature, data.humidity);
    }
}

impl Observer for StatisticsDisplay {
    fn update(&mut self, data: &WeatherData) {
        self.record(data.temperature);
    }
}

impl Observer for ForecastDisplay {
    fn update(&mut self, data: &WeatherData) {
        self.record(data.pressure);
    }
}
