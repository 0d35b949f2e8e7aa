//! Client library for the OpenWeatherMap current weather API (v2.5).
//!
//! This crate provides:
//! - An asynchronous client with four lookup modes (name, city id, zip
//!   code, coordinates), each with a `find_*` variant that absorbs
//!   "location not found"
//! - Strongly-typed, immutable domain entities mapped from the JSON
//!   response
//! - After-the-fact unit conversion for temperature and wind readings
//!
//! ```no_run
//! use openweather::{OpenWeather, TemperatureUnit, UnitSystem};
//!
//! # async fn run() -> Result<(), openweather::Error> {
//! let api = OpenWeather::builder()
//!     .api_key("<api key>")
//!     .units(UnitSystem::Metric)
//!     .build()?;
//!
//! let forecast = api.by_name("London").await?;
//! let fahrenheit = forecast.temperature.convert_to(TemperatureUnit::Fahrenheit);
//!
//! println!("{}: {:.1} {}", forecast.location.name, fahrenheit.value, fahrenheit.unit);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod convert;
pub mod error;
pub mod model;
mod query;
mod response;
pub mod units;

pub use client::{BASE_URL, OpenWeather, OpenWeatherBuilder};
pub use config::Config;
pub use error::Error;
pub use model::{
    Cloudiness, Coordinates, Forecast, Humidity, Location, Pressure, Temperature, Time,
    Visibility, WeatherCondition, Wind,
};
pub use units::{Language, SpeedUnit, TemperatureUnit, UnitSystem};
