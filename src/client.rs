//! The API client: configuration builder, lookup entry points and the
//! fetch pipeline.

use reqwest::{Client, StatusCode};
use tracing::{debug, instrument};

use crate::config::Config;
use crate::error::Error;
use crate::model::{Coordinates, Forecast};
use crate::query::{self, Query};
use crate::response;
use crate::units::{Language, UnitSystem};

/// Default endpoint of the current-weather API.
pub const BASE_URL: &str = "https://api.openweathermap.org/data/2.5/weather";

/// Asynchronous client for the current-weather API.
///
/// One lookup performs exactly one GET. The client holds no mutable state,
/// so concurrent lookups are independent; they only share the underlying
/// transport handle.
#[derive(Debug, Clone)]
pub struct OpenWeather {
    config: Config,
    http: Client,
    base_url: String,
}

impl OpenWeather {
    /// Creates a client with the default transport and endpoint.
    pub fn new(config: Config) -> Self {
        Self { config, http: Client::new(), base_url: BASE_URL.to_string() }
    }

    pub fn builder() -> OpenWeatherBuilder {
        OpenWeatherBuilder::default()
    }

    /// The configuration lookups are issued with.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Looks a location up by its free-text name.
    pub async fn by_name(&self, name: &str) -> Result<Forecast, Error> {
        self.fetch(Query::Name(name.to_string())).await
    }

    /// Looks a location up by the provider's unique city id.
    pub async fn by_id(&self, id: u64) -> Result<Forecast, Error> {
        self.fetch(Query::Id(id)).await
    }

    /// Looks a location up by postal code, optionally suffixed with a
    /// country code (`"94040,us"`).
    pub async fn by_zip_code(&self, zip: &str) -> Result<Forecast, Error> {
        self.fetch(Query::ZipCode(zip.to_string())).await
    }

    /// Looks a location up by geographical coordinates.
    pub async fn by_coordinates(&self, coords: &Coordinates) -> Result<Forecast, Error> {
        self.fetch(Query::coordinates(coords)).await
    }

    /// Like [`by_name`](Self::by_name), but an unmatched query yields
    /// `Ok(None)` instead of [`Error::NotFound`].
    pub async fn find_by_name(&self, name: &str) -> Result<Option<Forecast>, Error> {
        absent_on_not_found(self.by_name(name).await)
    }

    /// Like [`by_id`](Self::by_id), but an unmatched query yields `Ok(None)`
    /// instead of [`Error::NotFound`].
    pub async fn find_by_id(&self, id: u64) -> Result<Option<Forecast>, Error> {
        absent_on_not_found(self.by_id(id).await)
    }

    /// Like [`by_zip_code`](Self::by_zip_code), but an unmatched query
    /// yields `Ok(None)` instead of [`Error::NotFound`].
    pub async fn find_by_zip_code(&self, zip: &str) -> Result<Option<Forecast>, Error> {
        absent_on_not_found(self.by_zip_code(zip).await)
    }

    /// Like [`by_coordinates`](Self::by_coordinates), but an unmatched query
    /// yields `Ok(None)` instead of [`Error::NotFound`].
    pub async fn find_by_coordinates(
        &self,
        coords: &Coordinates,
    ) -> Result<Option<Forecast>, Error> {
        absent_on_not_found(self.by_coordinates(coords).await)
    }

    #[instrument(skip(self), fields(endpoint = %self.base_url))]
    async fn fetch(&self, query: Query) -> Result<Forecast, Error> {
        let params = query::build_query(&query, &self.config)?;

        debug!("requesting current weather");

        let res = self.http.get(&self.base_url).query(&params).send().await?;

        let status = res.status();
        if status == StatusCode::UNAUTHORIZED {
            return Err(Error::Authentication);
        }
        if status == StatusCode::NOT_FOUND {
            return Err(Error::NotFound);
        }
        if status != StatusCode::OK {
            return Err(Error::UnexpectedResponse(status));
        }

        let body = res.text().await?;

        response::decode(&body, self.config.clone())
    }
}

fn absent_on_not_found(result: Result<Forecast, Error>) -> Result<Option<Forecast>, Error> {
    match result {
        Ok(forecast) => Ok(Some(forecast)),
        Err(Error::NotFound) => Ok(None),
        Err(err) => Err(err),
    }
}

/// Fluent form of client construction. Fields accumulate freely; the
/// required-key check only happens in [`build`](Self::build).
#[derive(Debug, Default)]
pub struct OpenWeatherBuilder {
    api_key: Option<String>,
    units: UnitSystem,
    language: Language,
    http: Option<Client>,
    base_url: Option<String>,
}

impl OpenWeatherBuilder {
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn units(mut self, units: UnitSystem) -> Self {
        self.units = units;
        self
    }

    pub fn language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    /// Custom transport handle, e.g. one with timeouts or a proxy
    /// configured.
    pub fn http(mut self, http: Client) -> Self {
        self.http = Some(http);
        self
    }

    /// Overrides the API endpoint. Useful for tests and gateways.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Finalizes the client, failing with [`Error::Configuration`] when no
    /// API key was supplied.
    pub fn build(self) -> Result<OpenWeather, Error> {
        let api_key = self
            .api_key
            .ok_or_else(|| Error::Configuration("no API key was provided".to_string()))?;

        let config =
            Config::new(api_key)?.with_units(self.units).with_language(self.language);

        Ok(OpenWeather {
            config,
            http: self.http.unwrap_or_default(),
            base_url: self.base_url.unwrap_or_else(|| BASE_URL.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Cloudiness, Humidity, Location, Pressure, Temperature, Time, Visibility, WeatherCondition, Wind};
    use chrono::{FixedOffset, TimeZone, Utc};

    #[test]
    fn builder_without_api_key_fails_to_finalize() {
        let err = OpenWeather::builder().units(UnitSystem::Metric).build().unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
    }

    #[test]
    fn builder_with_empty_api_key_fails_to_finalize() {
        let err = OpenWeather::builder().api_key("").build().unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
    }

    #[test]
    fn builder_carries_choices_into_the_config() {
        let api = OpenWeather::builder()
            .api_key("KEY")
            .units(UnitSystem::Imperial)
            .language(Language::French)
            .build()
            .expect("valid client");

        assert_eq!(api.config().api_key, "KEY");
        assert_eq!(api.config().units, UnitSystem::Imperial);
        assert_eq!(api.config().language, Language::French);
        assert_eq!(api.base_url, BASE_URL);
    }

    fn dummy_forecast() -> Forecast {
        let config = Config::new("KEY").expect("valid config");
        Forecast {
            config,
            location: Location { name: "London".to_string(), id: 1, country_code: "GB".to_string() },
            cloudiness: Cloudiness { percent: 0 },
            coordinates: Coordinates::new(-0.1257, 51.5085),
            humidity: Humidity { percent: None },
            pressure: Pressure { pressure: 1012.0, sea_level: None, ground_level: None },
            temperature: Temperature {
                value: 280.32,
                feels_like: 278.0,
                min: 279.0,
                max: 281.0,
                unit: crate::units::TemperatureUnit::Kelvin,
            },
            time: Time {
                timezone: FixedOffset::east_opt(0).expect("valid offset"),
                sunrise: Utc.timestamp_opt(0, 0).unwrap(),
                sunset: Utc.timestamp_opt(0, 0).unwrap(),
            },
            visibility: Visibility { meters: None },
            condition: WeatherCondition {
                id: 800,
                main: "Clear".to_string(),
                description: "clear sky".to_string(),
                icon: "01d".to_string(),
            },
            wind: Wind {
                speed: 4.1,
                direction: None,
                gust: None,
                unit: crate::units::SpeedUnit::MetersPerSecond,
            },
        }
    }

    #[test]
    fn only_not_found_maps_to_an_absent_result() {
        let hit = absent_on_not_found(Ok(dummy_forecast())).expect("a hit passes through");
        assert!(hit.is_some());

        let miss = absent_on_not_found(Err(Error::NotFound)).expect("a miss is absorbed");
        assert!(miss.is_none());

        let err = absent_on_not_found(Err(Error::Authentication)).unwrap_err();
        assert!(matches!(err, Error::Authentication));
    }
}
