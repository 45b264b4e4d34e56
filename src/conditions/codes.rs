//! Provider weather codes: categories, text labels and icon identifiers

use serde::{Deserialize, Serialize};
use std::fmt;

/// Label used for absent codes and codes outside every known group
pub const FALLBACK_LABEL: &str = "Weather";

/// Icon used for absent codes and codes outside every known group
pub const DEFAULT_ICON_ID: &str = "02d";

const ICON_URL_BASE: &str = "https://openweathermap.org/img/wn/";

/// Weather condition groups of the provider's code table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeatherCategory {
    /// 200-232
    Thunderstorm,
    /// 300-321
    Drizzle,
    /// 500-531
    Rain,
    /// 600-622
    Snow,
    /// 701-781, fog/mist/haze
    Atmosphere,
    /// 800
    Clear,
    /// 801-804
    Clouds,
    Unknown,
}

impl WeatherCategory {
    #[must_use]
    pub fn from_code(code: Option<i64>) -> Self {
        match code {
            Some(200..=232) => Self::Thunderstorm,
            Some(300..=321) => Self::Drizzle,
            Some(500..=531) => Self::Rain,
            Some(600..=622) => Self::Snow,
            Some(701..=781) => Self::Atmosphere,
            Some(800) => Self::Clear,
            Some(801..=804) => Self::Clouds,
            _ => Self::Unknown,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Thunderstorm => "Thunderstorm",
            Self::Drizzle => "Drizzle",
            Self::Rain => "Rain",
            Self::Snow => "Snow",
            Self::Atmosphere => "Fog / Mist",
            Self::Clear => "Clear",
            Self::Clouds => "Clouds",
            Self::Unknown => FALLBACK_LABEL,
        }
    }
}

impl fmt::Display for WeatherCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Text label for a provider weather code
#[must_use]
pub fn label_for_code(code: Option<i64>) -> &'static str {
    WeatherCategory::from_code(code).label()
}

/// Day icon identifier for a provider weather code.
///
/// Cloud codes get their own icon per coverage step, every other group shares one.
#[must_use]
pub fn icon_id_for_code(code: Option<i64>) -> &'static str {
    match code {
        Some(801) => "02d",
        Some(802) => "03d",
        Some(803 | 804) => "04d",
        _ => match WeatherCategory::from_code(code) {
            WeatherCategory::Thunderstorm => "11d",
            WeatherCategory::Drizzle => "09d",
            WeatherCategory::Rain => "10d",
            WeatherCategory::Snow => "13d",
            WeatherCategory::Atmosphere => "50d",
            WeatherCategory::Clear => "01d",
            WeatherCategory::Clouds | WeatherCategory::Unknown => DEFAULT_ICON_ID,
        },
    }
}

/// Whether `token` already is an icon identifier: two digits plus `d` (day) or `n` (night)
#[must_use]
pub fn is_icon_token(token: &str) -> bool {
    matches!(
        token.as_bytes(),
        [a, b, b'd' | b'n'] if a.is_ascii_digit() && b.is_ascii_digit()
    )
}

/// Icon identifier for an observation: a provider icon token passes through unchanged, anything
/// else is derived from the weather code.
#[must_use]
pub fn resolve_icon_id(icon: Option<&str>, code: Option<i64>) -> String {
    match icon.map(str::trim) {
        Some(token) if is_icon_token(token) => token.to_string(),
        _ => icon_id_for_code(code).to_string(),
    }
}

/// Display URL of the provider's icon image
#[must_use]
pub fn icon_url(icon_id: &str) -> String {
    format!("{ICON_URL_BASE}{icon_id}@2x.png")
}
