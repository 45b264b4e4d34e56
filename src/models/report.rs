//! Manual weather report form

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};

use super::{Observation, Reading, ReadingSource};
use crate::numeric;

/// Fields of the hand-filled report form.
///
/// Every numeric field is parsed leniently: a field that is missing, empty or not a number ends up
/// absent without affecting the others. Wind speed is entered in km/h.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportForm {
    #[serde(default, deserialize_with = "numeric::lenient_code")]
    pub code: Option<i64>,
    #[serde(default, deserialize_with = "numeric::lenient_f64")]
    pub temp: Option<f64>,
    #[serde(default, deserialize_with = "numeric::lenient_f64")]
    pub wind_speed: Option<f64>,
    #[serde(default, deserialize_with = "numeric::lenient_f64")]
    pub wind_dir: Option<f64>,
    #[serde(default, deserialize_with = "numeric::lenient_f64")]
    pub pressure: Option<f64>,
    #[serde(default, deserialize_with = "numeric::lenient_f64")]
    pub humidity: Option<f64>,
    /// Observation time for back-dated reports (RFC 3339)
    #[serde(default, deserialize_with = "lenient_time")]
    pub time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl ReportForm {
    /// Turn the form into a manual reading stamped with its own time, or `now`
    #[must_use]
    pub fn into_reading(self, now: DateTime<Utc>) -> Reading {
        let timestamp = self.time.unwrap_or(now);
        Reading::new(
            ReadingSource::Manual,
            timestamp,
            Observation {
                temperature_c: self.temp,
                wind_speed_kmh: self.wind_speed,
                wind_direction_deg: self.wind_dir,
                pressure_hpa: self.pressure,
                humidity_pct: self.humidity,
                weather_code: self.code,
                icon: self.icon.filter(|icon| !icon.trim().is_empty()),
                description: self.description,
            },
        )
    }
}

fn lenient_time<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value
        .as_ref()
        .and_then(serde_json::Value::as_str)
        .and_then(|text| DateTime::parse_from_rfc3339(text.trim()).ok())
        .map(|time| time.with_timezone(&Utc)))
}
