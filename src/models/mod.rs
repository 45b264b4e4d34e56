//! Data models for the WeatherTop application
//!
//! This module contains the domain models organized by concern:
//! - Reading: one normalized weather observation
//! - History: the per-station ordered sequence of readings
//! - Station: a named location owning its history
//! - Report: the hand-filled report form

pub mod history;
pub mod reading;
pub mod report;
pub mod station;

// Re-export all public types for convenient access
pub use history::ReadingHistory;
pub use reading::{Observation, Reading, ReadingSource};
pub use report::ReportForm;
pub use station::{NewStation, Station};
