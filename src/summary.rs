//! Summary aggregation over a station's reading history
//!
//! Produces the "latest" projection and per-field min/max ranges for temperature, wind speed and
//! pressure. Each field is reduced on its own: a reading without pressure still contributes its
//! temperature, and a field with no usable samples reports [`NO_DATA`] while the others are
//! computed normally. Nothing in here fails; the worst result is an all-[`NO_DATA`] summary.

use serde::Serialize;

use crate::models::Reading;
use crate::numeric::{min_max, one_decimal};

/// Rendered value for a bound with no valid samples
pub const NO_DATA: &str = "—";

/// Reading with the greatest timestamp.
///
/// Back-dated reports make the last inserted reading unreliable, so this never looks at position.
/// Among equal timestamps the one inserted last wins.
#[must_use]
pub fn latest(history: &[Reading]) -> Option<&Reading> {
    history.iter().max_by_key(|reading| reading.timestamp)
}

/// Min/max ranges of the tracked fields over the whole history
#[must_use]
pub fn summarize(history: &[Reading]) -> Summary {
    Summary {
        temperature: FieldRange::over(history, |r| r.temperature_c),
        wind_speed: FieldRange::over(history, |r| r.wind_speed_kmh),
        pressure: FieldRange::over(history, |r| r.pressure_hpa),
    }
}

/// Inclusive range of one field's valid samples
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FieldRange {
    pub min: f64,
    pub max: f64,
}

impl FieldRange {
    fn over<F>(history: &[Reading], field: F) -> Option<Self>
    where
        F: Fn(&Reading) -> Option<f64>,
    {
        min_max(history.iter().filter_map(field)).map(|(min, max)| Self { min, max })
    }
}

/// Numeric summary; `None` marks a field without any valid sample
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub temperature: Option<FieldRange>,
    pub wind_speed: Option<FieldRange>,
    pub pressure: Option<FieldRange>,
}

impl Summary {
    /// Display strings: temperature and wind always carry one decimal, pressure is printed as is
    #[must_use]
    pub fn render(&self) -> RenderedSummary {
        RenderedSummary {
            temperature: RenderedRange::new(self.temperature, Precision::OneDecimal),
            wind_speed: RenderedRange::new(self.wind_speed, Precision::OneDecimal),
            pressure: RenderedRange::new(self.pressure, Precision::Plain),
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Precision {
    OneDecimal,
    Plain,
}

impl Precision {
    fn format(self, value: Option<f64>) -> String {
        match (value, self) {
            (None, _) => NO_DATA.to_string(),
            (Some(v), Precision::OneDecimal) => one_decimal(v),
            // -0.0 prints as "-0"
            (Some(v), Precision::Plain) => format!("{}", v + 0.0),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedRange {
    pub min: String,
    pub max: String,
}

impl RenderedRange {
    fn new(range: Option<FieldRange>, precision: Precision) -> Self {
        Self {
            min: precision.format(range.map(|r| r.min)),
            max: precision.format(range.map(|r| r.max)),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.min == NO_DATA && self.max == NO_DATA
    }
}

/// Summary as handed to the renderer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderedSummary {
    pub temperature: RenderedRange,
    pub wind_speed: RenderedRange,
    pub pressure: RenderedRange,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Observation, ReadingSource};
    use chrono::{Duration, TimeZone, Utc};

    fn reading(temp: Option<f64>, wind: Option<f64>, pressure: Option<f64>) -> Reading {
        Reading::new(
            ReadingSource::Manual,
            Utc::now(),
            Observation {
                temperature_c: temp,
                wind_speed_kmh: wind,
                pressure_hpa: pressure,
                ..Observation::default()
            },
        )
    }

    #[test]
    fn test_empty_history() {
        let summary = summarize(&[]);
        assert_eq!(summary, Summary::default());

        let rendered = summary.render();
        assert!(rendered.temperature.is_empty());
        assert!(rendered.wind_speed.is_empty());
        assert!(rendered.pressure.is_empty());
        assert_eq!(rendered.pressure.min, "—");
        assert!(latest(&[]).is_none());
    }

    #[test]
    fn test_fields_are_independent() {
        let history = vec![
            reading(Some(10.0), None, None),
            reading(Some(20.0), Some(5.0), None),
            reading(None, None, Some(1000.0)),
        ];

        let summary = summarize(&history);

        assert_eq!(summary.temperature, Some(FieldRange { min: 10.0, max: 20.0 }));
        assert_eq!(summary.wind_speed, Some(FieldRange { min: 5.0, max: 5.0 }));
        assert_eq!(summary.pressure, Some(FieldRange { min: 1000.0, max: 1000.0 }));

        let rendered = summary.render();
        assert_eq!(rendered.temperature.min, "10.0");
        assert_eq!(rendered.temperature.max, "20.0");
        assert_eq!(rendered.wind_speed.min, "5.0");
        assert_eq!(rendered.wind_speed.max, "5.0");
        assert_eq!(rendered.pressure.min, "1000");
        assert_eq!(rendered.pressure.max, "1000");
    }

    #[test]
    fn test_missing_field_reports_no_data_alone() {
        let history = vec![reading(Some(-3.24), None, Some(1013.5))];

        let rendered = summarize(&history).render();

        assert_eq!(rendered.temperature.min, "-3.2");
        assert!(rendered.wind_speed.is_empty());
        assert_eq!(rendered.pressure.max, "1013.5");
    }

    #[test]
    fn test_one_decimal_ties_round_up() {
        let history = vec![reading(Some(9.25), Some(0.75), None), reading(Some(0.75), None, None)];

        let rendered = summarize(&history).render();

        assert_eq!(rendered.temperature.min, "0.8");
        assert_eq!(rendered.temperature.max, "9.3");
        assert_eq!(rendered.wind_speed.max, "0.8");
    }

    #[test]
    fn test_negative_zero_pressure_renders_as_zero() {
        let history = vec![reading(None, None, Some(-0.0))];

        let rendered = summarize(&history).render();

        assert_eq!(rendered.pressure.min, "0");
        assert_eq!(rendered.pressure.max, "0");
    }

    #[test]
    fn test_latest_selects_max_timestamp() {
        let t1 = Utc.with_ymd_and_hms(2025, 3, 1, 9, 0, 0).unwrap();
        let t2 = t1 + Duration::hours(6);
        let t3 = t1 + Duration::hours(2);
        let at = |t| Reading::new(ReadingSource::Manual, t, Observation::default());
        let history = vec![at(t1), at(t2), at(t3)];

        assert_eq!(latest(&history).map(|r| r.timestamp), Some(t2));
    }

    #[test]
    fn test_latest_prefers_later_insert_on_tie() {
        let t = Utc.with_ymd_and_hms(2025, 3, 1, 9, 0, 0).unwrap();
        let first = Reading::new(ReadingSource::Provider, t, Observation::default());
        let second = Reading::new(ReadingSource::Manual, t, Observation::default());
        let second_id = second.id;

        assert_eq!(latest(&[first, second]).map(|r| r.id), Some(second_id));
    }

    #[test]
    fn test_rendered_summary_json_shape() {
        let history = vec![reading(Some(7.0), Some(12.0), None)];
        let json = serde_json::to_value(summarize(&history).render()).unwrap();

        assert_eq!(json["temperature"]["max"], "7.0");
        assert_eq!(json["windSpeed"]["min"], "12.0");
        assert_eq!(json["pressure"]["min"], "—");
    }
}
