//! Client configuration.

use crate::error::Error;
use crate::units::{Language, UnitSystem};

/// Immutable configuration a client is built from and a [`Forecast`] carries
/// back to the caller.
///
/// [`Forecast`]: crate::model::Forecast
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub api_key: String,
    pub units: UnitSystem,
    pub language: Language,
}

impl Config {
    /// Builds a configuration with the default unit system (`Standard`) and
    /// language (`English`).
    ///
    /// Fails with [`Error::Configuration`] when the key is empty.
    pub fn new(api_key: impl Into<String>) -> Result<Self, Error> {
        let api_key = api_key.into();

        if api_key.trim().is_empty() {
            return Err(Error::Configuration("the provided API key is empty".to_string()));
        }

        Ok(Self { api_key, units: UnitSystem::default(), language: Language::default() })
    }

    pub fn with_units(mut self, units: UnitSystem) -> Self {
        self.units = units;
        self
    }

    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }
}
