//! View assembly for the rendering layer
//!
//! Station cards, the station page and the forecast page are all built here from readings,
//! summaries and provider payloads, so every page shows the same labels and precision.

use serde::Serialize;
use uuid::Uuid;

use crate::conditions::{
    beaufort_name, celsius_to_fahrenheit, direction_label_fine, icon_url, precipitation_percent,
    resolve_icon_id,
};
use crate::config::DashboardConfig;
use crate::models::{Reading, ReadingSource, Station};
use crate::numeric::{one_decimal, round_half_up};
use crate::openweather::{Condition, CurrentConditions, ForecastItem};
use crate::summary::{NO_DATA, RenderedSummary};

/// Display projection of the latest reading
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LatestView {
    pub reading_id: Uuid,
    pub source: ReadingSource,
    pub time: String,
    pub icon_url: String,
    pub label: String,
    pub description: String,
    /// Celsius, one decimal
    pub temp_c: Option<String>,
    /// Fahrenheit, one decimal
    pub temp_f: Option<String>,
    /// km/h, one decimal
    pub wind_speed: Option<String>,
    pub wind_bft: Option<u8>,
    pub wind_bft_name: Option<&'static str>,
    /// 8-point compass label
    pub wind_dir_label: Option<&'static str>,
    pub pressure: Option<f64>,
    pub humidity: Option<f64>,
}

impl LatestView {
    #[must_use]
    pub fn from_reading(reading: &Reading) -> Self {
        let wind_bft = reading.beaufort_force();

        Self {
            reading_id: reading.id,
            source: reading.source,
            time: reading.timestamp.to_rfc3339(),
            icon_url: reading.icon_url(),
            label: reading.label.clone(),
            description: reading.description.clone(),
            temp_c: reading.temperature_c.map(one_decimal),
            temp_f: reading
                .temperature_c
                .map(celsius_to_fahrenheit)
                .map(one_decimal),
            wind_speed: reading.wind_speed_kmh.map(one_decimal),
            wind_bft,
            wind_bft_name: wind_bft.and_then(beaufort_name),
            wind_dir_label: reading.direction_label_coarse(),
            pressure: reading.pressure_hpa,
            humidity: reading.humidity_pct,
        }
    }
}

/// One station on the dashboard
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StationCard {
    pub id: Uuid,
    pub name: String,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub reading_count: usize,
    pub latest: Option<LatestView>,
    pub summary: RenderedSummary,
}

impl StationCard {
    #[must_use]
    pub fn from_station(station: &Station) -> Self {
        Self {
            id: station.id,
            name: station.name.clone(),
            lat: station.lat,
            lng: station.lng,
            reading_count: station.readings.len(),
            latest: station.latest().map(LatestView::from_reading),
            summary: station.readings.summary().render(),
        }
    }
}

/// Dashboard cards sorted by station name, ignoring case
#[must_use]
pub fn dashboard_cards(stations: &[Station]) -> Vec<StationCard> {
    let mut cards: Vec<StationCard> = stations.iter().map(StationCard::from_station).collect();
    cards.sort_by_cached_key(|card| card.name.to_lowercase());
    cards
}

/// A row of the station page's reading table
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadingRow {
    #[serde(flatten)]
    pub reading: Reading,
    pub wind_dir_label: Option<&'static str>,
    pub wind_bft: Option<u8>,
    pub icon_url: String,
}

impl From<&Reading> for ReadingRow {
    fn from(reading: &Reading) -> Self {
        Self {
            reading: reading.clone(),
            wind_dir_label: reading.direction_label_coarse(),
            wind_bft: reading.beaufort_force(),
            icon_url: reading.icon_url(),
        }
    }
}

/// Station page: latest card, summary and every reading newest first
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StationView {
    #[serde(flatten)]
    pub card: StationCard,
    pub readings: Vec<ReadingRow>,
}

impl StationView {
    #[must_use]
    pub fn from_station(station: &Station) -> Self {
        Self {
            card: StationCard::from_station(station),
            readings: station
                .readings
                .newest_first()
                .into_iter()
                .map(ReadingRow::from)
                .collect(),
        }
    }
}

fn upper_description(condition: Option<&Condition>) -> String {
    condition
        .and_then(|c| c.description.as_deref())
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .map_or_else(|| NO_DATA.to_string(), str::to_uppercase)
}

fn condition_icon_url(condition: Option<&Condition>) -> Option<String> {
    let condition = condition?;
    if condition.icon.is_none() && condition.id.is_none() {
        return None;
    }
    Some(icon_url(&resolve_icon_id(
        condition.icon.as_deref(),
        condition.id,
    )))
}

/// Current conditions block of the forecast page
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentView {
    /// Celsius, whole degrees
    pub temp: Option<f64>,
    pub feels: Option<f64>,
    pub desc: String,
    pub icon_url: Option<String>,
    /// km/h
    pub wind: Option<f64>,
    pub wind_deg: Option<f64>,
    /// 16-point compass label
    pub wind_dir_label: Option<&'static str>,
    pub pressure: Option<f64>,
    pub humidity: Option<f64>,
}

impl CurrentView {
    #[must_use]
    pub fn from_payload(payload: &CurrentConditions) -> Self {
        let condition = payload.primary_condition();
        Self {
            temp: payload.main.temp.map(round_half_up),
            feels: payload.main.feels_like.map(round_half_up),
            desc: upper_description(condition),
            icon_url: condition_icon_url(condition),
            wind: payload.wind.speed_kmh(),
            wind_deg: payload.wind.deg,
            wind_dir_label: direction_label_fine(payload.wind.deg),
            pressure: payload.main.pressure,
            humidity: payload.main.humidity,
        }
    }
}

/// One 3-hour forecast step
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HourlySlot {
    pub time: Option<String>,
    pub temp: Option<f64>,
    pub feels: Option<f64>,
    pub desc: String,
    /// Probability of precipitation in percent
    pub pop: u8,
    pub icon_url: Option<String>,
}

/// One day of the forecast, sampled from a single step
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DailySlot {
    pub date: Option<String>,
    pub tmax: Option<f64>,
    pub tmin: Option<f64>,
    pub pop: u8,
    pub desc: String,
    pub icon_url: Option<String>,
}

/// The first `count` forecast steps
#[must_use]
pub fn hourly_slots(items: &[ForecastItem], count: usize) -> Vec<HourlySlot> {
    items
        .iter()
        .take(count)
        .map(|item| {
            let condition = item.primary_condition();
            HourlySlot {
                time: item.dt_txt.clone(),
                temp: item.main.temp,
                feels: item.main.feels_like,
                desc: upper_description(condition),
                pop: precipitation_percent(item.pop),
                icon_url: condition_icon_url(condition),
            }
        })
        .collect()
}

/// Every `stride`-th forecast step, at most `days` of them
#[must_use]
pub fn daily_slots(items: &[ForecastItem], stride: usize, days: usize) -> Vec<DailySlot> {
    items
        .iter()
        .step_by(stride.max(1))
        .take(days)
        .map(|item| {
            let condition = item.primary_condition();
            DailySlot {
                date: item.dt_txt.clone(),
                tmax: item.main.temp_max,
                tmin: item.main.temp_min,
                pop: precipitation_percent(item.pop),
                desc: upper_description(condition),
                icon_url: condition_icon_url(condition),
            }
        })
        .collect()
}

/// Forecast page
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastView {
    pub station_id: Uuid,
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    pub current: CurrentView,
    pub summary: RenderedSummary,
    pub hourly: Vec<HourlySlot>,
    pub daily: Vec<DailySlot>,
}

impl ForecastView {
    /// Assemble the page for a station whose history already contains the current reading
    #[must_use]
    pub fn build(
        station: &Station,
        (lat, lon): (f64, f64),
        current: &CurrentConditions,
        forecast: &[ForecastItem],
        settings: &DashboardConfig,
    ) -> Self {
        Self {
            station_id: station.id,
            name: station.name.clone(),
            lat,
            lon,
            current: CurrentView::from_payload(current),
            summary: station.readings.summary().render(),
            hourly: hourly_slots(forecast, settings.hourly_slots),
            daily: daily_slots(forecast, settings.daily_stride, settings.daily_days),
        }
    }
}
