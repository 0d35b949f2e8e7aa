//! Measurement unit systems and response languages supported by the API.

/// Measurement unit system the provider should use for a response.
///
/// `Standard` is the provider default (Kelvin, meters per second) and is
/// signalled by omitting the `units` query parameter entirely.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum UnitSystem {
    #[default]
    Standard,
    Metric,
    Imperial,
}

impl UnitSystem {
    /// Wire token for the `units` query parameter. `None` means the
    /// parameter is omitted and the provider falls back to `Standard`.
    pub const fn token(&self) -> Option<&'static str> {
        match self {
            UnitSystem::Standard => None,
            UnitSystem::Metric => Some("metric"),
            UnitSystem::Imperial => Some("imperial"),
        }
    }

    /// The temperature unit responses are expressed in under this system.
    pub const fn temperature_unit(&self) -> TemperatureUnit {
        match self {
            UnitSystem::Standard => TemperatureUnit::Kelvin,
            UnitSystem::Metric => TemperatureUnit::Celsius,
            UnitSystem::Imperial => TemperatureUnit::Fahrenheit,
        }
    }

    /// The wind speed unit responses are expressed in under this system.
    pub const fn speed_unit(&self) -> SpeedUnit {
        match self {
            UnitSystem::Standard | UnitSystem::Metric => SpeedUnit::MetersPerSecond,
            UnitSystem::Imperial => SpeedUnit::MilesPerHour,
        }
    }
}

/// Unit of the four temperature readings carried by a forecast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemperatureUnit {
    Kelvin,
    Celsius,
    Fahrenheit,
}

impl TemperatureUnit {
    pub const fn symbol(&self) -> &'static str {
        match self {
            TemperatureUnit::Kelvin => "K",
            TemperatureUnit::Celsius => "\u{b0}C",
            TemperatureUnit::Fahrenheit => "\u{b0}F",
        }
    }
}

impl std::fmt::Display for TemperatureUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Unit of wind speed and gust readings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpeedUnit {
    MetersPerSecond,
    MilesPerHour,
}

impl SpeedUnit {
    pub const fn label(&self) -> &'static str {
        match self {
            SpeedUnit::MetersPerSecond => "m/s",
            SpeedUnit::MilesPerHour => "mph",
        }
    }
}

impl std::fmt::Display for SpeedUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Language of the textual weather descriptions in a response.
///
/// The wire codes are the provider's own and do not always match ISO 639
/// (e.g. `cz` for Czech, `kr` for Korean).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Language {
    Afrikaans,
    Albanian,
    Arabic,
    Azerbaijani,
    Basque,
    Bulgarian,
    Catalan,
    ChineseSimplified,
    ChineseTraditional,
    Croatian,
    Czech,
    Danish,
    Dutch,
    #[default]
    English,
    Farsi,
    Finnish,
    French,
    Galician,
    German,
    Greek,
    Hebrew,
    Hindi,
    Hungarian,
    Indonesian,
    Italian,
    Japanese,
    Korean,
    Latvian,
    Lithuanian,
    Macedonian,
    Norwegian,
    Polish,
    Portuguese,
    PortugueseBrazil,
    Romanian,
    Russian,
    Serbian,
    Slovak,
    Slovenian,
    Spanish,
    Swedish,
    Thai,
    Turkish,
    Ukrainian,
    Vietnamese,
    Zulu,
}

impl Language {
    /// Wire code for the `lang` query parameter.
    pub const fn code(&self) -> &'static str {
        match self {
            Language::Afrikaans => "af",
            Language::Albanian => "al",
            Language::Arabic => "ar",
            Language::Azerbaijani => "az",
            Language::Basque => "eu",
            Language::Bulgarian => "bg",
            Language::Catalan => "ca",
            Language::ChineseSimplified => "zh_cn",
            Language::ChineseTraditional => "zh_tw",
            Language::Croatian => "hr",
            Language::Czech => "cz",
            Language::Danish => "da",
            Language::Dutch => "nl",
            Language::English => "en",
            Language::Farsi => "fa",
            Language::Finnish => "fi",
            Language::French => "fr",
            Language::Galician => "gl",
            Language::German => "de",
            Language::Greek => "el",
            Language::Hebrew => "he",
            Language::Hindi => "hi",
            Language::Hungarian => "hu",
            Language::Indonesian => "id",
            Language::Italian => "it",
            Language::Japanese => "ja",
            Language::Korean => "kr",
            Language::Latvian => "la",
            Language::Lithuanian => "lt",
            Language::Macedonian => "mk",
            Language::Norwegian => "no",
            Language::Polish => "pl",
            Language::Portuguese => "pt",
            Language::PortugueseBrazil => "pt_br",
            Language::Romanian => "ro",
            Language::Russian => "ru",
            Language::Serbian => "sr",
            Language::Slovak => "sk",
            Language::Slovenian => "sl",
            Language::Spanish => "es",
            Language::Swedish => "se",
            Language::Thai => "th",
            Language::Turkish => "tr",
            Language::Ukrainian => "ua",
            Language::Vietnamese => "vi",
            Language::Zulu => "zu",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_system_has_no_wire_token() {
        assert_eq!(UnitSystem::Standard.token(), None);
        assert_eq!(UnitSystem::Metric.token(), Some("metric"));
        assert_eq!(UnitSystem::Imperial.token(), Some("imperial"));
    }

    #[test]
    fn unit_tags_follow_the_unit_system() {
        assert_eq!(UnitSystem::Standard.temperature_unit(), TemperatureUnit::Kelvin);
        assert_eq!(UnitSystem::Metric.temperature_unit(), TemperatureUnit::Celsius);
        assert_eq!(UnitSystem::Imperial.temperature_unit(), TemperatureUnit::Fahrenheit);

        assert_eq!(UnitSystem::Standard.speed_unit(), SpeedUnit::MetersPerSecond);
        assert_eq!(UnitSystem::Metric.speed_unit(), SpeedUnit::MetersPerSecond);
        assert_eq!(UnitSystem::Imperial.speed_unit(), SpeedUnit::MilesPerHour);
    }

    #[test]
    fn defaults_are_standard_and_english() {
        assert_eq!(UnitSystem::default(), UnitSystem::Standard);
        assert_eq!(Language::default(), Language::English);
    }

    #[test]
    fn provider_specific_language_codes() {
        assert_eq!(Language::Czech.code(), "cz");
        assert_eq!(Language::Korean.code(), "kr");
        assert_eq!(Language::Swedish.code(), "se");
        assert_eq!(Language::Ukrainian.code(), "ua");
        assert_eq!(Language::ChineseSimplified.code(), "zh_cn");
    }
}
