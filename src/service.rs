//! Station operations
//!
//! Ties the store, the weather provider and the view assembly together. Provider calls are single
//! attempts: during station creation a failure is only logged, on the forecast page it is returned.

use std::sync::Arc;

use chrono::Utc;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::config::DashboardConfig;
use crate::dashboard::{ForecastView, StationCard, StationView, dashboard_cards};
use crate::models::{NewStation, Reading, ReadingSource, ReportForm, Station};
use crate::openweather::WeatherProvider;
use crate::store::StationRepository;
use crate::{Result, WeatherTopError};

/// Station operations behind the HTTP handlers.
///
/// Cheap to clone: the store and the provider are shared trait objects.
#[derive(Clone)]
pub struct WeatherTopService {
    store: Arc<dyn StationRepository>,
    provider: Arc<dyn WeatherProvider>,
    settings: DashboardConfig,
}

impl WeatherTopService {
    pub fn new(
        store: Arc<dyn StationRepository>,
        provider: Arc<dyn WeatherProvider>,
        settings: DashboardConfig,
    ) -> Self {
        Self {
            store,
            provider,
            settings,
        }
    }

    async fn station(&self, id: Uuid) -> Result<Station> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or_else(|| WeatherTopError::not_found(format!("Station {id}")))
    }

    /// Coordinates of the station, geocoding its name when they are missing
    async fn resolve_coordinates(&self, station: &mut Station) -> Result<Option<(f64, f64)>> {
        if let Some(coordinates) = station.coordinates() {
            return Ok(Some(coordinates));
        }

        let Some(hit) = self.provider.geocode(&station.name).await? else {
            return Ok(None);
        };
        station.set_coordinates(hit.lat, hit.lon);
        Ok(Some((hit.lat, hit.lon)))
    }

    /// Fetch current conditions and append them to the station as a provider reading
    async fn record_current(&self, station: &mut Station) -> Result<()> {
        let Some((lat, lon)) = self.resolve_coordinates(station).await? else {
            return Err(WeatherTopError::not_found(format!(
                "Coordinates for station '{}'",
                station.name
            )));
        };

        let current = self.provider.current(lat, lon).await?;
        let reading = Reading::new(ReadingSource::Provider, Utc::now(), current.to_observation());
        station.readings.push(reading);
        Ok(())
    }

    /// All stations, sorted by name
    #[instrument(skip(self))]
    pub async fn dashboard(&self) -> Result<Vec<StationCard>> {
        let stations = self.store.all().await?;
        Ok(dashboard_cards(&stations))
    }

    /// Create a station and, when the provider is configured, try once to give it a first reading
    #[instrument(skip(self, input), fields(name = %input.name))]
    pub async fn create_station(&self, input: NewStation) -> Result<StationView> {
        let mut station = Station::new(input)?;

        if self.provider.is_configured() {
            if let Err(e) = self.record_current(&mut station).await {
                warn!(station = %station.name, "Could not fetch initial reading: {}", e);
            }
        }

        let station = self.store.create(station).await?;
        Ok(StationView::from_station(&station))
    }

    #[instrument(skip(self))]
    pub async fn station_view(&self, id: Uuid) -> Result<StationView> {
        let station = self.station(id).await?;
        Ok(StationView::from_station(&station))
    }

    #[instrument(skip(self))]
    pub async fn delete_station(&self, id: Uuid) -> Result<()> {
        if self.store.delete(id).await? {
            Ok(())
        } else {
            Err(WeatherTopError::not_found(format!("Station {id}")))
        }
    }

    /// Store a manual report as a reading
    #[instrument(skip(self, form))]
    pub async fn add_report(&self, station_id: Uuid, form: ReportForm) -> Result<Reading> {
        let reading = form.into_reading(Utc::now());
        self.store.add_reading(station_id, reading).await
    }

    /// Delete a manual report. Unknown report ids are ignored.
    #[instrument(skip(self))]
    pub async fn delete_report(&self, station_id: Uuid, report_id: Uuid) -> Result<()> {
        let station = self.station(station_id).await?;
        let Some(reading) = station.readings.get(report_id) else {
            info!(station = %station.name, %report_id, "no such report, nothing to delete");
            return Ok(());
        };

        if !reading.is_manual() {
            return Err(WeatherTopError::validation(
                "Only manual reports can be deleted",
            ));
        }

        self.store.delete_reading(station_id, report_id).await?;
        Ok(())
    }

    /// Current conditions and forecast for a station. The current conditions are also stored as a
    /// provider reading, together with any coordinates found by geocoding.
    #[instrument(skip(self))]
    pub async fn forecast(&self, id: Uuid) -> Result<ForecastView> {
        if !self.provider.is_configured() {
            return Err(WeatherTopError::config("missing openweather api key"));
        }

        let mut station = self.station(id).await?;
        let geocoded = station.coordinates().is_none();
        let Some((lat, lon)) = self.resolve_coordinates(&mut station).await? else {
            return Err(WeatherTopError::not_found(format!(
                "Coordinates for station '{}'",
                station.name
            )));
        };
        if geocoded {
            self.store.set_coordinates(id, lat, lon).await?;
        }

        let current = self.provider.current(lat, lon).await?;
        let reading = Reading::new(ReadingSource::Provider, Utc::now(), current.to_observation());
        self.store.add_reading(id, reading).await?;
        let station = self.station(id).await?;

        let forecast = self.provider.forecast(lat, lon).await?;
        info!(
            station = %station.name,
            steps = forecast.list.len(),
            readings = station.readings.len(),
            "forecast loaded"
        );

        Ok(ForecastView::build(
            &station,
            (lat, lon),
            &current,
            &forecast.list,
            &self.settings,
        ))
    }
}
