//! Pull model: observers are handed the subject and read only what they need.

use std::cell::RefCell;
use std::rc::Rc;

use super::display::{CurrentConditionsDisplay, ForecastDisplay, StatisticsDisplay};
use super::{ObserverId, Registry, WeatherData};

pub trait WeatherSubject {
    fn temperature(&self) -> f64;
    fn humidity(&self) -> f64;
    fn pressure(&self) -> f64;
}

pub trait Observer {
    fn update(&mut self, subject: &dyn WeatherSubject);
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

    pub fn attach<O: Observer + 'static>(&mut self, observer: O) -> Rc<RefCell<O>> {
        let shared = Rc::new(RefCell::new(observer));
        self.observers.register(shared.clone());
        shared
    }

    pub fn remove_observer(&mut self, id: ObserverId) -> bool {
        self.observers.remove(id)
    }

    pub fn notify_observers(&self) {
        tracing::debug!(observers = self.observers.len(), "pull notify");
        for observer in self.observers.iter() {
            observer.borrow_mut().update(self);
        }
    }

    pub fn set_measurements(&mut self, temperature: f64, humidity: f64, pressure: f64) {
        self.data = WeatherData::new(temperature, humidity, pressure);
        self.notify_observers();
    }

    pub fn observers_count(&self) -> usize {
        self.observers.len()
    }
}

impl WeatherSubject for WeatherStation {
    fn temperature(&self) -> f64 {
        self.data.temperature
    }

    fn humidity(&self) -> f64 {
        self.data.humidity
    }

    fn pressure(&self) -> f64 {
        self.data.pressure
    }
}

impl Observer for CurrentConditionsDisplay {
    fn update(&mut self, subject: &dyn WeatherSubject) {
        self.record(subject.temperature(), subject.humidity());
    }
}

impl Observer for StatisticsDisplay {
    fn update(&mut self, subject: &dyn WeatherSubject) {
        self.record(subject.temperature());
    }
}

impl Observer for ForecastDisplay {
    fn update(&mut self, subject: &dyn WeatherSubject) {
        self.record(subject.pressure());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observer::DisplayElement;

    // Records what it pulled from the subject on each update.
    #[derive(Default)]
    struct PressureProbe {
        seen: Vec<f64>,
    }

    impl Observer for PressureProbe {
        fn update(&mut self, subject: &dyn WeatherSubject) {
            self.seen.push(subject.pressure());
        }
    }

    #[test]
    fn test_observer_pulls_from_subject() {
        let mut station = WeatherStation::new();
        let probe = station.attach(PressureProbe::default());

        station.set_measurements(25.0, 65.0, 1013.0);
        station.set_measurements(26.0, 66.0, 1008.0);

        assert_eq!(probe.borrow().seen, vec![1013.0, 1008.0]);
        assert_eq!(station.observers_count(), 1);
    }

    #[test]
    fn test_removed_observer_stops_receiving() {
        let mut station = WeatherStation::new();
        let probe = Rc::new(RefCell::new(PressureProbe::default()));
        let id = station.register_observer(probe.clone());

        station.set_measurements(25.0, 65.0, 1013.0);
        assert!(station.remove_observer(id));
        station.set_measurements(25.0, 65.0, 990.0);

        assert_eq!(probe.borrow().seen, vec![1013.0]);
        assert_eq!(station.observers_count(), 0);
    }

    #[test]
    fn test_subject_getters() {
        let mut station = WeatherStation::new();
        assert_eq!(station.temperature(), 0.0);

        station.set_measurements(18.5, 55.0, 1020.0);
        assert_eq!(station.temperature(), 18.5);
        assert_eq!(station.humidity(), 55.0);
        assert_eq!(station.pressure(), 1020.0);
    }

    #[test]
    fn test_displays_match_push_behaviour() {
        let mut station = WeatherStation::new();
        let current = station.attach(CurrentConditionsDisplay::new());
        let stats = station.attach(StatisticsDisplay::new());
        let forecast = station.attach(ForecastDisplay::new());

        station.set_measurements(20.0, 65.0, 1012.0);
        station.set_measurements(30.0, 70.0, 1012.0);
        station.set_measurements(25.0, 60.0, 1015.0);

        assert_eq!(
            current.borrow().display(),
            "Current conditions: 25°C and 60% humidity"
        );
        assert_eq!(
            stats.borrow().display(),
            "Avg/Max/Min temperature = 25.0/30/20"
        );
        assert_eq!(
            forecast.borrow().display(),
            "Forecast: Improving weather on the way!"
        );
    }
}
