use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, instrument};

use super::models::{CurrentConditions, ForecastList, GeocodingHit};
use crate::config::WeatherConfig;
use crate::{Result, WeatherTopError};

/// Source of current conditions, forecasts and coordinates.
///
/// Every call is a single attempt; callers decide whether a failure is fatal.
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    /// Whether the provider has what it needs (an API key) to be called at all
    fn is_configured(&self) -> bool;

    /// First geocoding hit for a place name
    async fn geocode(&self, name: &str) -> Result<Option<GeocodingHit>>;

    async fn current(&self, lat: f64, lon: f64) -> Result<CurrentConditions>;

    async fn forecast(&self, lat: f64, lon: f64) -> Result<ForecastList>;
}

/// OpenWeather API client
pub struct OpenWeatherClient {
    client: Client,
    api_key: Option<String>,
    base_url: String,
    geo_path: String,
    current_path: String,
    forecast_path: String,
    units: String,
}

impl OpenWeatherClient {
    /// Create a new client
    pub fn new(config: &WeatherConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(u64::from(config.timeout_seconds)))
            .user_agent(concat!("WeatherTop/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| WeatherTopError::config(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            geo_path: config.geo_path.clone(),
            current_path: config.current_path.clone(),
            forecast_path: config.forecast_path.clone(),
            units: config.units.clone(),
        })
    }

    fn api_key(&self) -> Result<&str> {
        self.api_key
            .as_deref()
            .ok_or_else(|| WeatherTopError::config("missing openweather api key"))
    }

    fn point_query(&self, lat: f64, lon: f64) -> String {
        format!("lat={lat}&lon={lon}&units={}", urlencoding::encode(&self.units))
    }

    /// GET `path?query&appid=...` and decode the JSON body. The key never reaches the logs.
    async fn get_json<T: DeserializeOwned>(&self, path: &str, query: &str) -> Result<T> {
        let api_key = self.api_key()?;
        debug!("GET {}{}?{}", self.base_url, path, query);

        let url = format!(
            "{}{}?{}&appid={}",
            self.base_url,
            path,
            query,
            urlencoding::encode(api_key)
        );

        let response = self.client.get(&url).send().await.map_err(|e| {
            WeatherTopError::api(format!("OpenWeather request failed: {}", e.without_url()))
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(match status {
                StatusCode::UNAUTHORIZED => {
                    WeatherTopError::api("OpenWeather rejected the API key")
                }
                StatusCode::TOO_MANY_REQUESTS => {
                    WeatherTopError::api("OpenWeather rate limit exceeded")
                }
                _ => WeatherTopError::api(format!("OpenWeather returned {status}")),
            });
        }

        response.json::<T>().await.map_err(|e| {
            WeatherTopError::parse(format!(
                "Failed to parse OpenWeather response: {}",
                e.without_url()
            ))
        })
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherClient {
    fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    #[instrument(skip(self))]
    async fn geocode(&self, name: &str) -> Result<Option<GeocodingHit>> {
        let query = format!("q={}&limit=1", urlencoding::encode(name));
        let hits: Vec<GeocodingHit> = self.get_json(&self.geo_path, &query).await?;
        Ok(hits.into_iter().next())
    }

    #[instrument(skip(self))]
    async fn current(&self, lat: f64, lon: f64) -> Result<CurrentConditions> {
        self.get_json(&self.current_path, &self.point_query(lat, lon))
            .await
    }

    #[instrument(skip(self))]
    async fn forecast(&self, lat: f64, lon: f64) -> Result<ForecastList> {
        self.get_json(&self.forecast_path, &self.point_query(lat, lon))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_without_key_is_not_configured() {
        let client = OpenWeatherClient::new(&WeatherConfig::default()).unwrap();
        assert!(!client.is_configured());
        assert!(matches!(client.api_key(), Err(WeatherTopError::Config { .. })));
    }

    #[test]
    fn test_point_query_and_base_url() {
        let config = WeatherConfig {
            api_key: Some("key".to_string()),
            base_url: "https://example.test/".to_string(),
            ..WeatherConfig::default()
        };
        let client = OpenWeatherClient::new(&config).unwrap();

        assert!(client.is_configured());
        assert_eq!(client.base_url, "https://example.test");
        assert_eq!(
            client.point_query(52.25, -7.1),
            "lat=52.25&lon=-7.1&units=metric"
        );
    }

    #[tokio::test]
    async fn test_unconfigured_client_fails_without_network() {
        let client = OpenWeatherClient::new(&WeatherConfig::default()).unwrap();
        let result = client.current(0.0, 0.0).await;
        assert!(matches!(result, Err(WeatherTopError::Config { .. })));
    }
}
