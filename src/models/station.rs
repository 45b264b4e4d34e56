//! Station model: a named location and its readings

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Reading, ReadingHistory};
use crate::numeric;
use crate::{Result, WeatherTopError};

/// Station creation input. Coordinates are optional; without them the name is geocoded.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewStation {
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "numeric::lenient_f64")]
    pub lat: Option<f64>,
    #[serde(default, deserialize_with = "numeric::lenient_f64")]
    pub lng: Option<f64>,
}

/// A tracked location
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Station {
    pub id: Uuid,
    /// City or station name
    pub name: String,
    /// Latitude in decimal degrees
    pub lat: Option<f64>,
    /// Longitude in decimal degrees
    pub lng: Option<f64>,
    pub readings: ReadingHistory,
}

impl Station {
    /// Validate the input and create a station without readings
    pub fn new(input: NewStation) -> Result<Self> {
        let name = input.name.trim();
        if name.is_empty() {
            return Err(WeatherTopError::validation("Station name cannot be empty"));
        }

        let lat = input.lat.filter(|lat| (-90.0..=90.0).contains(lat));
        let lng = input.lng.filter(|lng| (-180.0..=180.0).contains(lng));

        Ok(Self {
            id: Uuid::new_v4(),
            name: name.to_string(),
            lat,
            lng,
            readings: ReadingHistory::new(),
        })
    }

    /// Both coordinates, if known
    #[must_use]
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        self.lat.zip(self.lng)
    }

    pub fn set_coordinates(&mut self, lat: f64, lng: f64) {
        self.lat = Some(lat);
        self.lng = Some(lng);
    }

    #[must_use]
    pub fn latest(&self) -> Option<&Reading> {
        self.readings.latest()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_station_name_is_trimmed() {
        let station = Station::new(NewStation {
            name: "  Dublin ".to_string(),
            ..NewStation::default()
        })
        .unwrap();

        assert_eq!(station.name, "Dublin");
        assert!(station.readings.is_empty());
        assert!(station.coordinates().is_none());
    }

    #[test]
    fn test_empty_name_is_rejected() {
        let result = Station::new(NewStation {
            name: "   ".to_string(),
            ..NewStation::default()
        });

        assert!(matches!(result, Err(WeatherTopError::Validation { .. })));
    }

    #[test]
    fn test_coordinates_from_form_strings() {
        let input: NewStation =
            serde_json::from_value(json!({"name": "Tramore", "lat": "52.16", "lng": "-7.15"}))
                .unwrap();
        let station = Station::new(input).unwrap();

        assert_eq!(station.coordinates(), Some((52.16, -7.15)));
    }

    #[test]
    fn test_out_of_range_coordinates_are_dropped() {
        let station = Station::new(NewStation {
            name: "Nowhere".to_string(),
            lat: Some(123.0),
            lng: Some(10.0),
        })
        .unwrap();

        assert_eq!(station.lat, None);
        assert!(station.coordinates().is_none());
    }
}
