use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    routing::get,
};
use serde::{Deserialize, Serialize};

use crate::{
    AirInsightError, FetchError,
    config::DashboardConfig,
    demo::SyntheticDemo,
    fetcher::{AirQualityFetcher, validate_city_name},
    report::DashboardReport,
    transport::HttpTransport,
};

pub struct AppState<T: HttpTransport> {
    pub fetcher: AirQualityFetcher<T>,
    pub dashboard: DashboardConfig,
}

#[derive(Debug, Deserialize)]
pub struct CityQuery {
    pub city: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
    pub message: String,
    /// The dashboard may ask again on its next refresh
    #[serde(default)]
    pub retryable: bool,
}

type ApiResult<T> = Result<Json<T>, (StatusCode, Json<ApiError>)>;

impl From<FetchError> for (StatusCode, Json<ApiError>) {
    fn from(err: FetchError) -> Self {
        let status = match err {
            FetchError::CityNotFound { .. } => StatusCode::NOT_FOUND,
            FetchError::NetworkFailure { .. } | FetchError::MalformedResponse { .. } => {
                StatusCode::BAD_GATEWAY
            }
        };
        (
            status,
            Json(ApiError {
                error: err.kind().to_string(),
                message: err.user_message(),
                retryable: err.is_recoverable(),
            }),
        )
    }
}

impl From<AirInsightError> for (StatusCode, Json<ApiError>) {
    fn from(err: AirInsightError) -> Self {
        let (status, kind) = match &err {
            AirInsightError::Fetch(fetch) => return fetch.clone().into(),
            AirInsightError::Validation { .. } => (StatusCode::BAD_REQUEST, "validation"),
            AirInsightError::Config { .. } => (StatusCode::INTERNAL_SERVER_ERROR, "config"),
        };
        (
            status,
            Json(ApiError {
                error: kind.to_string(),
                message: err.user_message(),
                retryable: false,
            }),
        )
    }
}

pub fn router<T: HttpTransport + 'static>(state: Arc<AppState<T>>) -> Router {
    Router::new()
        .route("/air-quality", get(get_air_quality::<T>))
        .route("/dashboard", get(get_dashboard_settings::<T>))
        .route("/demo", get(get_demo))
        .route("/health", get(|| async { "ok" }))
        .with_state(state)
}

async fn get_air_quality<T: HttpTransport + 'static>(
    State(state): State<Arc<AppState<T>>>,
    Query(query): Query<CityQuery>,
) -> ApiResult<DashboardReport> {
    let city = query.city.unwrap_or_default();
    validate_city_name(&city)?;

    let (weather, air_quality) = state.fetcher.fetch(&city).await?;
    Ok(Json(DashboardReport::build(city, weather, air_quality)))
}

async fn get_dashboard_settings<T: HttpTransport + 'static>(
    State(state): State<Arc<AppState<T>>>,
) -> Json<DashboardConfig> {
    Json(state.dashboard.clone())
}

async fn get_demo() -> Json<SyntheticDemo> {
    Json(SyntheticDemo::generate())
}
