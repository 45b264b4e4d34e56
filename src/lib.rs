//! `WeatherTop` - personal weather-station dashboard
//!
//! Normalizes provider and hand-entered observations into readings, summarizes each station's
//! history and serves the result as JSON views.

pub mod api;
pub mod conditions;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod models;
pub mod numeric;
pub mod openweather;
pub mod service;
pub mod store;
pub mod summary;
pub mod telemetry;
pub mod web;

// Re-export core types for public API
pub use config::WeatherTopConfig;
pub use error::WeatherTopError;
pub use models::{Reading, ReadingHistory, ReadingSource, ReportForm, Station};
pub use openweather::{OpenWeatherClient, WeatherProvider};
pub use service::WeatherTopService;
pub use store::{InMemoryStationStore, StationRepository};
pub use summary::{NO_DATA, Summary, latest, summarize};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, WeatherTopError>;
