//! Domain entities mapped out of a current-weather response.
//!
//! Every type here is an immutable value record: it is built once by the
//! fetch pipeline and never mutated afterwards. "Updating" a reading means
//! producing a new value, e.g. through the conversions in [`crate::convert`].

use chrono::{DateTime, FixedOffset, Utc};

use crate::config::Config;
use crate::units::{SpeedUnit, TemperatureUnit};

/// Geographical coordinates of the location weather was requested for.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub longitude: f64,
    pub latitude: f64,
}

impl Coordinates {
    pub const fn new(longitude: f64, latitude: f64) -> Self {
        Self { longitude, latitude }
    }
}

/// The matched location: display name, the provider's city id and the
/// two-letter country code (e.g. `"GB"`).
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    pub name: String,
    pub id: u64,
    pub country_code: String,
}

/// Cloud cover, percent (0–100).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cloudiness {
    pub percent: u8,
}

/// Relative humidity, percent (0–100). Not reported for every location.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Humidity {
    pub percent: Option<u8>,
}

/// Atmospheric pressure readings, hPa.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pressure {
    pub pressure: f64,
    pub sea_level: Option<f64>,
    pub ground_level: Option<f64>,
}

/// Temperature readings. All four values are expressed in `unit`; a
/// conversion replaces the values and the tag together.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Temperature {
    pub value: f64,
    pub feels_like: f64,
    pub min: f64,
    pub max: f64,
    pub unit: TemperatureUnit,
}

/// Wind readings. `speed` and `gust` share `unit`; a missing `direction`
/// means the provider reported it as variable or unknown.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Wind {
    pub speed: f64,
    /// Meteorological direction in degrees, 0–360.
    pub direction: Option<u16>,
    pub gust: Option<f64>,
    pub unit: SpeedUnit,
}

impl Wind {
    /// Compass name of the wind direction, when one was reported and falls
    /// within 0–360 degrees.
    pub fn direction_name(&self) -> Option<&'static str> {
        match self.direction? {
            0..=25 | 336..=360 => Some("North"),
            26..=70 => Some("Northeast"),
            71..=110 => Some("East"),
            111..=155 => Some("Southeast"),
            156..=200 => Some("South"),
            201..=250 => Some("Southwest"),
            251..=290 => Some("West"),
            291..=335 => Some("Northwest"),
            _ => None,
        }
    }
}

/// Local time data of the location: its UTC offset and the sunrise/sunset
/// instants of the current day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Time {
    pub timezone: FixedOffset,
    pub sunrise: DateTime<Utc>,
    pub sunset: DateTime<Utc>,
}

impl Time {
    /// Whole seconds east of UTC, as reported by the provider.
    pub fn utc_offset_seconds(&self) -> i32 {
        self.timezone.local_minus_utc()
    }

    /// Sunrise in the location's own timezone.
    pub fn local_sunrise(&self) -> DateTime<FixedOffset> {
        self.sunrise.with_timezone(&self.timezone)
    }

    /// Sunset in the location's own timezone.
    pub fn local_sunset(&self) -> DateTime<FixedOffset> {
        self.sunset.with_timezone(&self.timezone)
    }
}

/// Visibility in meters. Not reported for every location.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Visibility {
    pub meters: Option<u32>,
}

/// The provider's weather condition vocabulary: numeric condition id, a
/// coarse group (`"Clear"`, `"Rain"`, ...), a localized description and the
/// icon id. None of it is validated locally.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherCondition {
    pub id: u32,
    pub main: String,
    pub description: String,
    pub icon: String,
}

/// Aggregate result of one successful lookup.
///
/// Carries the [`Config`] the issuing client was built with, so downstream
/// code can tell which unit system and language produced the values without
/// re-deriving it.
#[derive(Debug, Clone, PartialEq)]
pub struct Forecast {
    pub config: Config,
    pub location: Location,
    pub cloudiness: Cloudiness,
    pub coordinates: Coordinates,
    pub humidity: Humidity,
    pub pressure: Pressure,
    pub temperature: Temperature,
    pub time: Time,
    pub visibility: Visibility,
    pub condition: WeatherCondition,
    pub wind: Wind,
}
