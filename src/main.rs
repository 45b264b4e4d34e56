use std::sync::Arc;

use anyhow::Result;
use tracing::{info, warn};

use weathertop::{
    InMemoryStationStore, OpenWeatherClient, WeatherProvider, WeatherTopConfig, WeatherTopService,
    telemetry, web,
};

#[tokio::main]
async fn main() -> Result<()> {
    let config = WeatherTopConfig::load()?;
    telemetry::init(&config.logging)?;

    let provider = OpenWeatherClient::new(&config.weather)?;
    if !provider.is_configured() {
        warn!("No OpenWeather API key configured, stations get no provider readings");
    }

    let service = WeatherTopService::new(
        Arc::new(InMemoryStationStore::new()),
        Arc::new(provider),
        config.dashboard.clone(),
    );

    info!("Starting WeatherTop {}", weathertop::VERSION);
    web::run(&config.server, service).await
}
