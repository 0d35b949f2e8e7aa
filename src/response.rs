//! Wire format of the current-weather endpoint and its mapping into the
//! domain entities.

use chrono::{DateTime, FixedOffset, Utc};
use serde::Deserialize;

use crate::config::Config;
use crate::error::Error;
use crate::model::{
    Cloudiness, Coordinates, Forecast, Humidity, Location, Pressure, Temperature, Time,
    Visibility, WeatherCondition, Wind,
};

#[derive(Debug, Deserialize)]
struct CoordNode {
    lon: f64,
    lat: f64,
}

#[derive(Debug, Deserialize)]
struct ConditionNode {
    id: u32,
    main: String,
    description: String,
    icon: String,
}

#[derive(Debug, Deserialize)]
struct MainNode {
    temp: f64,
    feels_like: f64,
    temp_min: f64,
    temp_max: f64,
    pressure: f64,
    sea_level: Option<f64>,
    grnd_level: Option<f64>,
    humidity: Option<u8>,
}

#[derive(Debug, Deserialize)]
struct WindNode {
    speed: f64,
    deg: Option<u16>,
    gust: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct CloudsNode {
    all: u8,
}

#[derive(Debug, Deserialize)]
struct SysNode {
    country: String,
    sunrise: i64,
    sunset: i64,
}

/// Required top-level shape of a 200 response. Unknown fields (`base`,
/// `dt`, `cod`, ...) are ignored.
#[derive(Debug, Deserialize)]
struct CurrentResponse {
    coord: CoordNode,
    weather: Vec<ConditionNode>,
    main: MainNode,
    visibility: Option<u32>,
    wind: WindNode,
    clouds: CloudsNode,
    sys: SysNode,
    timezone: i32,
    name: String,
    id: u64,
}

fn malformed(message: impl Into<String>) -> Error {
    Error::MalformedResponse(message.into())
}

fn epoch_instant(seconds: i64, field: &str) -> Result<DateTime<Utc>, Error> {
    DateTime::from_timestamp(seconds, 0)
        .ok_or_else(|| malformed(format!("`{field}` is not a valid epoch timestamp: {seconds}")))
}

/// Decodes a 200 body into a [`Forecast`].
///
/// The temperature and wind unit tags come from the unit system the request
/// was made with; the provider does not echo the unit back.
pub(crate) fn decode(body: &str, config: Config) -> Result<Forecast, Error> {
    let raw: CurrentResponse =
        serde_json::from_str(body).map_err(|e| malformed(e.to_string()))?;

    // The contract requires a non-empty array; only the first entry is used.
    let condition = raw
        .weather
        .into_iter()
        .next()
        .ok_or_else(|| malformed("the `weather` array is empty"))?;

    let timezone = FixedOffset::east_opt(raw.timezone)
        .ok_or_else(|| malformed(format!("`timezone` offset is out of range: {}", raw.timezone)))?;

    let time = Time {
        timezone,
        sunrise: epoch_instant(raw.sys.sunrise, "sys.sunrise")?,
        sunset: epoch_instant(raw.sys.sunset, "sys.sunset")?,
    };

    let temperature = Temperature {
        value: raw.main.temp,
        feels_like: raw.main.feels_like,
        min: raw.main.temp_min,
        max: raw.main.temp_max,
        unit: config.units.temperature_unit(),
    };

    let wind = Wind {
        speed: raw.wind.speed,
        direction: raw.wind.deg,
        gust: raw.wind.gust,
        unit: config.units.speed_unit(),
    };

    Ok(Forecast {
        location: Location {
            name: raw.name,
            id: raw.id,
            country_code: raw.sys.country,
        },
        cloudiness: Cloudiness { percent: raw.clouds.all },
        coordinates: Coordinates::new(raw.coord.lon, raw.coord.lat),
        humidity: Humidity { percent: raw.main.humidity },
        pressure: Pressure {
            pressure: raw.main.pressure,
            sea_level: raw.main.sea_level,
            ground_level: raw.main.grnd_level,
        },
        temperature,
        time,
        visibility: Visibility { meters: raw.visibility },
        condition: WeatherCondition {
            id: condition.id,
            main: condition.main,
            description: condition.description,
            icon: condition.icon,
        },
        wind,
        config,
    })
}
