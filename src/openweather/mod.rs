//! OpenWeather integration
//!
//! Payload shapes of the current-conditions, forecast and geocoding endpoints, their conversion
//! into observations, and the HTTP client behind the [`WeatherProvider`] seam.

pub mod client;
pub mod models;

pub use client::{OpenWeatherClient, WeatherProvider};
pub use models::{
    Condition, CurrentConditions, ForecastItem, ForecastList, GeocodingHit, MainBlock, WindBlock,
};
