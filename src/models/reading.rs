//! Weather reading model and derived display values

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::conditions::{
    beaufort_force, direction_label_coarse, direction_label_fine, icon_url, label_for_code,
    normalize_degrees, resolve_icon_id,
};
use crate::numeric::finite;

/// Where a reading came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReadingSource {
    /// Fetched from the weather provider
    Provider,
    /// Entered through the report form
    Manual,
}

/// Raw attributes of one observation, already in display units but not yet validated
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Observation {
    pub temperature_c: Option<f64>,
    pub wind_speed_kmh: Option<f64>,
    pub wind_direction_deg: Option<f64>,
    pub pressure_hpa: Option<f64>,
    pub humidity_pct: Option<f64>,
    pub weather_code: Option<i64>,
    /// Provider icon token such as `10n`, if any
    pub icon: Option<String>,
    pub description: Option<String>,
}

/// One normalized weather observation.
///
/// Numeric fields are finite or `None`; the wind direction lies in `[0, 360)`. Readings are not
/// mutated after creation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Reading {
    pub id: Uuid,
    pub source: ReadingSource,
    pub timestamp: DateTime<Utc>,
    /// Temperature in Celsius
    pub temperature_c: Option<f64>,
    /// Wind speed in km/h
    pub wind_speed_kmh: Option<f64>,
    /// Wind direction in degrees (0 is North)
    pub wind_direction_deg: Option<f64>,
    /// Atmospheric pressure in hPa
    pub pressure_hpa: Option<f64>,
    /// Relative humidity in percent
    pub humidity_pct: Option<f64>,
    /// Provider weather code
    pub weather_code: Option<i64>,
    /// Text label derived from the weather code
    pub label: String,
    /// Icon identifier, provider token or derived from the weather code
    pub icon_id: String,
    pub description: String,
}

impl Reading {
    /// Normalize an observation into a reading with a fresh id
    #[must_use]
    pub fn new(source: ReadingSource, timestamp: DateTime<Utc>, observation: Observation) -> Self {
        let Observation {
            temperature_c,
            wind_speed_kmh,
            wind_direction_deg,
            pressure_hpa,
            humidity_pct,
            weather_code,
            icon,
            description,
        } = observation;

        Self {
            id: Uuid::new_v4(),
            source,
            timestamp,
            temperature_c: temperature_c.and_then(finite),
            wind_speed_kmh: wind_speed_kmh.and_then(finite),
            wind_direction_deg: wind_direction_deg.and_then(finite).map(normalize_degrees),
            pressure_hpa: pressure_hpa.and_then(finite),
            humidity_pct: humidity_pct.and_then(finite),
            weather_code,
            label: label_for_code(weather_code).to_string(),
            icon_id: resolve_icon_id(icon.as_deref(), weather_code),
            description: description.unwrap_or_default(),
        }
    }

    /// 8-point compass label of the wind direction
    #[must_use]
    pub fn direction_label_coarse(&self) -> Option<&'static str> {
        direction_label_coarse(self.wind_direction_deg)
    }

    /// 16-point compass label of the wind direction
    #[must_use]
    pub fn direction_label_fine(&self) -> Option<&'static str> {
        direction_label_fine(self.wind_direction_deg)
    }

    #[must_use]
    pub fn beaufort_force(&self) -> Option<u8> {
        beaufort_force(self.wind_speed_kmh)
    }

    #[must_use]
    pub fn icon_url(&self) -> String {
        icon_url(&self.icon_id)
    }

    #[must_use]
    pub fn is_manual(&self) -> bool {
        self.source == ReadingSource::Manual
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reading_normalizes_observation() {
        let reading = Reading::new(
            ReadingSource::Provider,
            Utc::now(),
            Observation {
                temperature_c: Some(f64::NAN),
                wind_speed_kmh: Some(45.0),
                wind_direction_deg: Some(-45.0),
                pressure_hpa: Some(f64::INFINITY),
                humidity_pct: Some(81.0),
                weather_code: Some(502),
                icon: None,
                description: Some("heavy intensity rain".to_string()),
            },
        );

        assert_eq!(reading.temperature_c, None);
        assert_eq!(reading.pressure_hpa, None);
        assert_eq!(reading.wind_direction_deg, Some(315.0));
        assert_eq!(reading.label, "Rain");
        assert_eq!(reading.icon_id, "10d");
        assert_eq!(reading.direction_label_coarse(), Some("NW"));
        assert_eq!(reading.direction_label_fine(), Some("NW"));
        assert_eq!(reading.beaufort_force(), Some(6));
    }

    #[test]
    fn test_derived_fields_without_source_values() {
        let reading = Reading::new(ReadingSource::Manual, Utc::now(), Observation::default());

        assert_eq!(reading.label, "Weather");
        assert_eq!(reading.icon_id, "02d");
        assert_eq!(reading.direction_label_coarse(), None);
        assert_eq!(reading.beaufort_force(), None);
        assert!(reading.description.is_empty());
        assert!(reading.is_manual());
    }

    #[test]
    fn test_provider_icon_token_wins() {
        let reading = Reading::new(
            ReadingSource::Provider,
            Utc::now(),
            Observation {
                weather_code: Some(800),
                icon: Some("01n".to_string()),
                ..Observation::default()
            },
        );

        assert_eq!(reading.icon_id, "01n");
        assert_eq!(
            reading.icon_url(),
            "https://openweathermap.org/img/wn/01n@2x.png"
        );
    }

    #[test]
    fn test_reading_serializes_camel_case() {
        let reading = Reading::new(
            ReadingSource::Manual,
            Utc::now(),
            Observation {
                temperature_c: Some(12.5),
                ..Observation::default()
            },
        );
        let json = serde_json::to_value(&reading).unwrap();

        assert_eq!(json["temperatureC"], 12.5);
        assert_eq!(json["source"], "manual");
        assert!(json["windSpeedKmh"].is_null());
    }
}
