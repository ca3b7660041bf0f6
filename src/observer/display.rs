use std::cmp::Ordering;

/// Renders a display's current state as a single line.
pub trait DisplayElement {
    fn display(&self) -> String;
}

// Negative zero prints as "-0"; readings show it as plain 0.
fn unsigned_zero(value: f64) -> f64 {
    if value == 0.0 {
        0.0
    } else {
        value
    }
}

// One decimal place, ties rounded away from zero.
fn one_decimal(value: f64) -> String {
    let rounded = (unsigned_zero(value) * 10.0).round() / 10.0;
    format!("{rounded:.1}")
}

// ============================================================================
// Current conditions
// ============================================================================

#[derive(Debug, Clone, Default)]
pub struct CurrentConditionsDisplay {
    temperature: f64,
    humidity: f64,
}

impl CurrentConditionsDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record(&mut self, temperature: f64, humidity: f64) {
        self.temperature = temperature;
        self.humidity = humidity;
    }
}

impl DisplayElement for CurrentConditionsDisplay {
    fn display(&self) -> String {
        format!(
            "Current conditions: {}°C and {}% humidity",
            unsigned_zero(self.temperature),
            unsigned_zero(self.humidity)
        )
    }
}

// ============================================================================
// Statistics
// ============================================================================

#[derive(Debug, Clone, Default)]
pub struct StatisticsDisplay {
    temp_sum: f64,
    num_readings: u32,
    // (min, max); None until the first reading
    range: Option<(f64, f64)>,
}

impl StatisticsDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record(&mut self, temperature: f64) {
        self.temp_sum += temperature;
        self.num_readings += 1;
        self.range = Some(match self.range {
            None => (temperature, temperature),
            Some((min, max)) => (min.min(temperature), max.max(temperature)),
        });
    }

    pub fn num_readings(&self) -> u32 {
        self.num_readings
    }

    pub fn average(&self) -> Option<f64> {
        (self.num_readings > 0).then(|| self.temp_sum / f64::from(self.num_readings))
    }

    pub fn min(&self) -> Option<f64> {
        self.range.map(|(min, _)| min)
    }

    pub fn max(&self) -> Option<f64> {
        self.range.map(|(_, max)| max)
    }
}

impl DisplayElement for StatisticsDisplay {
    fn display(&self) -> String {
        match (self.average(), self.range) {
            (Some(avg), Some((min, max))) => format!(
                "Avg/Max/Min temperature = {}/{}/{}",
                one_decimal(avg),
                unsigned_zero(max),
                unsigned_zero(min)
            ),
            _ => "Avg/Max/Min temperature = n/a".to_string(),
        }
    }
}

// ============================================================================
// Forecast
// ============================================================================

const BASELINE_PRESSURE: f64 = 1013.0;

#[derive(Debug, Clone)]
pub struct ForecastDisplay {
    last_pressure: f64,
    current_pressure: f64,
}

impl Default for ForecastDisplay {
    fn default() -> Self {
        Self {
            last_pressure: BASELINE_PRESSURE,
            current_pressure: BASELINE_PRESSURE,
        }
    }
}

impl ForecastDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record(&mut self, pressure: f64) {
        self.last_pressure = self.current_pressure;
        self.current_pressure = pressure;
    }
}

impl DisplayElement for ForecastDisplay {
    fn display(&self) -> String {
        let outlook = match self.current_pressure.partial_cmp(&self.last_pressure) {
            Some(Ordering::Greater) => "Improving weather on the way!",
            Some(Ordering::Equal) => "More of the same",
            _ => "Watch out for cooler, rainy weather",
        };
        format!("Forecast: {outlook}")
    }
}
