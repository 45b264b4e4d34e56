//! Station persistence
//!
//! The service only talks to [`StationRepository`]; the bundled implementation keeps everything in
//! memory and loses it on restart.

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::info;
use uuid::Uuid;

use crate::models::{Reading, Station};
use crate::{Result, WeatherTopError};

/// Keyed store of stations and their readings
#[async_trait]
pub trait StationRepository: Send + Sync {
    async fn create(&self, station: Station) -> Result<Station>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Station>>;

    /// All stations in creation order
    async fn all(&self) -> Result<Vec<Station>>;

    /// Store coordinates on an existing station, leaving its readings untouched
    async fn set_coordinates(&self, id: Uuid, lat: f64, lng: f64) -> Result<()>;

    /// Delete a station with its readings; `false` if there was none
    async fn delete(&self, id: Uuid) -> Result<bool>;

    /// Append a reading to a station's history
    async fn add_reading(&self, station_id: Uuid, reading: Reading) -> Result<Reading>;

    /// Remove one reading; `Ok(None)` if the station has no such reading
    async fn delete_reading(&self, station_id: Uuid, reading_id: Uuid) -> Result<Option<Reading>>;
}

/// Process-local store
#[derive(Debug, Default)]
pub struct InMemoryStationStore {
    stations: RwLock<Vec<Station>>,
}

impl InMemoryStationStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn station_not_found(id: Uuid) -> WeatherTopError {
    WeatherTopError::not_found(format!("Station {id}"))
}

#[async_trait]
impl StationRepository for InMemoryStationStore {
    async fn create(&self, station: Station) -> Result<Station> {
        let mut stations = self.stations.write().await;
        stations.push(station.clone());
        info!(station = %station.name, total = stations.len(), "station created");
        Ok(station)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Station>> {
        let stations = self.stations.read().await;
        Ok(stations.iter().find(|s| s.id == id).cloned())
    }

    async fn all(&self) -> Result<Vec<Station>> {
        Ok(self.stations.read().await.clone())
    }

    async fn set_coordinates(&self, id: Uuid, lat: f64, lng: f64) -> Result<()> {
        let mut stations = self.stations.write().await;
        let station = stations
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| station_not_found(id))?;
        station.set_coordinates(lat, lng);
        info!(station = %station.name, lat, lng, "coordinates stored");
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<bool> {
        let mut stations = self.stations.write().await;
        let Some(index) = stations.iter().position(|s| s.id == id) else {
            return Ok(false);
        };
        let station = stations.remove(index);
        info!(station = %station.name, remaining = stations.len(), "station deleted");
        Ok(true)
    }

    async fn add_reading(&self, station_id: Uuid, reading: Reading) -> Result<Reading> {
        let mut stations = self.stations.write().await;
        let station = stations
            .iter_mut()
            .find(|s| s.id == station_id)
            .ok_or_else(|| station_not_found(station_id))?;
        station.readings.push(reading.clone());
        info!(
            station = %station.name,
            source = ?reading.source,
            total = station.readings.len(),
            "reading added"
        );
        Ok(reading)
    }

    async fn delete_reading(&self, station_id: Uuid, reading_id: Uuid) -> Result<Option<Reading>> {
        let mut stations = self.stations.write().await;
        let station = stations
            .iter_mut()
            .find(|s| s.id == station_id)
            .ok_or_else(|| station_not_found(station_id))?;
        let removed = station.readings.remove(reading_id);
        if removed.is_some() {
            info!(
                station = %station.name,
                remaining = station.readings.len(),
                "reading deleted"
            );
        }
        Ok(removed)
    }
}
