//! Lookup modes and query-parameter construction.

use crate::config::Config;
use crate::error::Error;
use crate::model::Coordinates;

/// The four ways a location can be looked up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Query {
    /// Free-text place name.
    Name(String),
    /// The provider's unique city id.
    Id(u64),
    /// Postal code, optionally suffixed with a country code (`"94040,us"`).
    ZipCode(String),
    /// Coordinate pair kept textual until [`build_query`] validates it.
    Coordinates { longitude: String, latitude: String },
}

impl Query {
    pub(crate) fn coordinates(coords: &Coordinates) -> Self {
        Query::Coordinates {
            longitude: coords.longitude.to_string(),
            latitude: coords.latitude.to_string(),
        }
    }
}

/// Builds the ordered query parameters for one lookup: `appid`, `lang`,
/// `units` (omitted under [`UnitSystem::Standard`], which the provider
/// treats as Kelvin and meters per second), then the mode parameters.
///
/// Percent-encoding is left to the transport when the pairs are attached to
/// the request URL.
///
/// [`UnitSystem::Standard`]: crate::units::UnitSystem::Standard
pub(crate) fn build_query(
    query: &Query,
    config: &Config,
) -> Result<Vec<(&'static str, String)>, Error> {
    let mut params = vec![
        ("appid", config.api_key.clone()),
        ("lang", config.language.code().to_string()),
    ];

    if let Some(token) = config.units.token() {
        params.push(("units", token.to_string()));
    }

    match query {
        Query::Name(name) => params.push(("q", name.clone())),
        Query::Id(id) => params.push(("id", id.to_string())),
        Query::ZipCode(zip) => params.push(("zip", zip.clone())),
        Query::Coordinates { longitude, latitude } => {
            params.push(("lon", parse_coordinate(longitude)?.to_string()));
            params.push(("lat", parse_coordinate(latitude)?.to_string()));
        }
    }

    Ok(params)
}

fn parse_coordinate(raw: &str) -> Result<f64, Error> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| Error::InvalidQuery(format!("`{raw}` is not a finite coordinate")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::{Language, UnitSystem};

    fn config(units: UnitSystem) -> Config {
        Config::new("KEY").expect("valid config").with_units(units)
    }

    #[test]
    fn name_query_under_default_units_omits_the_units_parameter() {
        let params =
            build_query(&Query::Name("London".to_string()), &config(UnitSystem::Standard))
                .expect("valid query");

        assert_eq!(
            params,
            vec![
                ("appid", "KEY".to_string()),
                ("lang", "en".to_string()),
                ("q", "London".to_string()),
            ]
        );
    }

    #[test]
    fn metric_units_and_language_are_emitted() {
        let config = config(UnitSystem::Metric).with_language(Language::German);
        let params = build_query(&Query::Id(2_643_743), &config).expect("valid query");

        assert_eq!(
            params,
            vec![
                ("appid", "KEY".to_string()),
                ("lang", "de".to_string()),
                ("units", "metric".to_string()),
                ("id", "2643743".to_string()),
            ]
        );
    }

    #[test]
    fn zip_codes_pass_through_untouched() {
        let params = build_query(&Query::ZipCode("94040,us".to_string()), &config(UnitSystem::Standard))
            .expect("valid query");

        assert!(params.contains(&("zip", "94040,us".to_string())));
    }

    #[test]
    fn coordinates_emit_lon_and_lat() {
        let query = Query::coordinates(&Coordinates::new(-0.1257, 51.5085));
        let params = build_query(&query, &config(UnitSystem::Standard)).expect("valid query");

        assert!(params.contains(&("lon", "-0.1257".to_string())));
        assert!(params.contains(&("lat", "51.5085".to_string())));
    }

    #[test]
    fn non_numeric_coordinates_are_an_invalid_query() {
        let query = Query::Coordinates {
            longitude: "not-a-number".to_string(),
            latitude: "51.5085".to_string(),
        };
        let err = build_query(&query, &config(UnitSystem::Standard)).unwrap_err();

        assert!(matches!(err, Error::InvalidQuery(_)));
        assert!(err.to_string().contains("not-a-number"));
    }

    #[test]
    fn non_finite_coordinates_are_an_invalid_query() {
        for bogus in ["NaN", "inf", "-inf"] {
            let query = Query::Coordinates {
                longitude: bogus.to_string(),
                latitude: "0".to_string(),
            };
            let result = build_query(&query, &config(UnitSystem::Standard));
            assert!(matches!(result, Err(Error::InvalidQuery(_))), "accepted {bogus}");
        }
    }
}
