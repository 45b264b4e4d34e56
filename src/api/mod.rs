use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post},
};
use serde_json::json;
use uuid::Uuid;

use crate::WeatherTopError;
use crate::dashboard::{ForecastView, StationCard, StationView};
use crate::models::{NewStation, Reading, ReportForm};
use crate::service::WeatherTopService;

type ApiResult<T> = Result<T, WeatherTopError>;

impl IntoResponse for WeatherTopError {
    fn into_response(self) -> Response {
        let status = match &self {
            WeatherTopError::NotFound { .. } => StatusCode::NOT_FOUND,
            WeatherTopError::Validation { .. } => StatusCode::BAD_REQUEST,
            WeatherTopError::Api { .. } | WeatherTopError::Parse { .. } => StatusCode::BAD_GATEWAY,
            WeatherTopError::Config { .. } | WeatherTopError::Io { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        if status.is_server_error() {
            tracing::error!("{}", self);
        }

        (status, Json(json!({ "error": self.user_message() }))).into_response()
    }
}

/// JSON routes over the station service, mounted under `/api` by [`crate::web::app`]
pub fn router(service: WeatherTopService) -> Router {
    Router::new()
        .route("/dashboard", get(get_dashboard))
        .route("/stations", post(create_station))
        .route("/stations/{id}", get(get_station).delete(delete_station))
        .route("/stations/{id}/reports", post(add_report))
        .route("/stations/{id}/reports/{report_id}", delete(delete_report))
        .route("/stations/{id}/forecast", get(get_forecast))
        .with_state(service)
}

async fn get_dashboard(
    State(service): State<WeatherTopService>,
) -> ApiResult<Json<Vec<StationCard>>> {
    Ok(Json(service.dashboard().await?))
}

async fn create_station(
    State(service): State<WeatherTopService>,
    Json(input): Json<NewStation>,
) -> ApiResult<(StatusCode, Json<StationView>)> {
    let view = service.create_station(input).await?;
    Ok((StatusCode::CREATED, Json(view)))
}

async fn get_station(
    State(service): State<WeatherTopService>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<StationView>> {
    Ok(Json(service.station_view(id).await?))
}

async fn delete_station(
    State(service): State<WeatherTopService>,
    Path(id): Path<Uuid>,
) -> ApiResult<StatusCode> {
    service.delete_station(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn add_report(
    State(service): State<WeatherTopService>,
    Path(id): Path<Uuid>,
    Json(form): Json<ReportForm>,
) -> ApiResult<(StatusCode, Json<Reading>)> {
    let reading = service.add_report(id, form).await?;
    Ok((StatusCode::CREATED, Json(reading)))
}

async fn delete_report(
    State(service): State<WeatherTopService>,
    Path((id, report_id)): Path<(Uuid, Uuid)>,
) -> ApiResult<StatusCode> {
    service.delete_report(id, report_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn get_forecast(
    State(service): State<WeatherTopService>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<ForecastView>> {
    Ok(Json(service.forecast(id).await?))
}
