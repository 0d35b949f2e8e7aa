//! Conversions between the unit systems a forecast can be expressed in.
//!
//! All conversions are pure: they return a new value and leave the input
//! untouched. Converting to the unit a reading is already in is the
//! identity.

use crate::model::{Temperature, Wind};
use crate::units::{SpeedUnit, TemperatureUnit};

/// One mile per hour in meters per second.
const MPH_IN_MPS: f64 = 0.447_04;

fn convert_reading(value: f64, from: TemperatureUnit, to: TemperatureUnit) -> f64 {
    use TemperatureUnit::{Celsius, Fahrenheit, Kelvin};

    match (from, to) {
        (Celsius, Kelvin) => value + 273.15,
        (Kelvin, Celsius) => value - 273.15,
        (Celsius, Fahrenheit) => value * 1.8 + 32.0,
        (Fahrenheit, Celsius) => (value - 32.0) / 1.8,
        // Kelvin and Fahrenheit convert through Celsius.
        (Kelvin, Fahrenheit) | (Fahrenheit, Kelvin) => {
            convert_reading(convert_reading(value, from, Celsius), Celsius, to)
        }
        _ => value,
    }
}

impl Temperature {
    /// Re-expresses all four readings in `unit`.
    pub fn convert_to(self, unit: TemperatureUnit) -> Temperature {
        if self.unit == unit {
            return self;
        }

        Temperature {
            value: convert_reading(self.value, self.unit, unit),
            feels_like: convert_reading(self.feels_like, self.unit, unit),
            min: convert_reading(self.min, self.unit, unit),
            max: convert_reading(self.max, self.unit, unit),
            unit,
        }
    }
}

impl Wind {
    /// Re-expresses speed and gust in `unit`. The direction is a bearing and
    /// is left as is.
    pub fn convert_to(self, unit: SpeedUnit) -> Wind {
        if self.unit == unit {
            return self;
        }

        let factor = match unit {
            // mph -> m/s
            SpeedUnit::MetersPerSecond => MPH_IN_MPS,
            // m/s -> mph
            SpeedUnit::MilesPerHour => 1.0 / MPH_IN_MPS,
        };

        Wind {
            speed: self.speed * factor,
            direction: self.direction,
            gust: self.gust.map(|gust| gust * factor),
            unit,
        }
    }
}
