//! OpenWeather API response structures and conversion utilities
//!
//! Every numeric attribute is optional and parsed leniently, so one odd field degrades that field
//! alone instead of failing the whole payload.

use serde::Deserialize;

use crate::conditions::to_kmh;
use crate::models::Observation;
use crate::numeric::{self, Finite};

/// One entry of the `weather` array
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Condition {
    /// Provider weather code
    #[serde(default, deserialize_with = "numeric::lenient_code")]
    pub id: Option<i64>,
    #[serde(default)]
    pub description: Option<String>,
    /// Icon token such as `10d`
    #[serde(default)]
    pub icon: Option<String>,
}

/// The `main` block: temperatures in Celsius (metric units), pressure in hPa, humidity in %
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MainBlock {
    #[serde(default, deserialize_with = "numeric::lenient_f64")]
    pub temp: Option<f64>,
    #[serde(default, deserialize_with = "numeric::lenient_f64")]
    pub feels_like: Option<f64>,
    #[serde(default, deserialize_with = "numeric::lenient_f64")]
    pub temp_min: Option<f64>,
    #[serde(default, deserialize_with = "numeric::lenient_f64")]
    pub temp_max: Option<f64>,
    #[serde(default, deserialize_with = "numeric::lenient_f64")]
    pub pressure: Option<f64>,
    #[serde(default, deserialize_with = "numeric::lenient_f64")]
    pub humidity: Option<f64>,
}

/// The `wind` block: speed in m/s, direction in degrees
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WindBlock {
    #[serde(default, deserialize_with = "numeric::lenient_f64")]
    pub speed: Option<f64>,
    #[serde(default, deserialize_with = "numeric::lenient_f64")]
    pub deg: Option<f64>,
}

impl WindBlock {
    /// Wind speed converted to whole km/h
    #[must_use]
    pub fn speed_kmh(&self) -> Option<f64> {
        self.speed.and_then(Finite::new).map(to_kmh)
    }
}

/// Current-conditions payload
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CurrentConditions {
    #[serde(default)]
    pub weather: Vec<Condition>,
    #[serde(default)]
    pub main: MainBlock,
    #[serde(default)]
    pub wind: WindBlock,
}

impl CurrentConditions {
    #[must_use]
    pub fn primary_condition(&self) -> Option<&Condition> {
        self.weather.first()
    }

    /// Observation ready to be stamped into a provider reading
    #[must_use]
    pub fn to_observation(&self) -> Observation {
        let condition = self.primary_condition().cloned().unwrap_or_default();
        Observation {
            temperature_c: self.main.temp,
            wind_speed_kmh: self.wind.speed_kmh(),
            wind_direction_deg: self.wind.deg,
            pressure_hpa: self.main.pressure,
            humidity_pct: self.main.humidity,
            weather_code: condition.id,
            icon: condition.icon,
            description: condition.description,
        }
    }
}

/// One 3-hour step of the forecast list
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ForecastItem {
    /// Timestamp text, e.g. `2025-03-01 12:00:00`
    #[serde(default)]
    pub dt_txt: Option<String>,
    #[serde(default)]
    pub main: MainBlock,
    #[serde(default)]
    pub weather: Vec<Condition>,
    #[serde(default)]
    pub wind: WindBlock,
    /// Probability of precipitation, 0.0-1.0
    #[serde(default, deserialize_with = "numeric::lenient_f64")]
    pub pop: Option<f64>,
}

impl ForecastItem {
    #[must_use]
    pub fn primary_condition(&self) -> Option<&Condition> {
        self.weather.first()
    }
}

/// Forecast-list payload
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ForecastList {
    #[serde(default)]
    pub list: Vec<ForecastItem>,
}

/// One hit of the direct geocoding endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct GeocodingHit {
    pub lat: f64,
    pub lon: f64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
}
