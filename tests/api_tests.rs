//! HTTP API tests against the router with a canned upstream

use std::sync::Arc;

use airinsight::api::{self, ApiError, AppState};
use airinsight::config::DashboardConfig;
use airinsight::{
    AirInsightError, AirQualityFetcher, Endpoints, FetchError, HttpTransport, UpstreamResponse,
};
use async_trait::async_trait;
use axum::{
    Json,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

const WEATHER_OK: &str = r#"{"coord":{"lon":77.4,"lat":23.2667},"main":{"temp":24.5,"humidity":60},"cod":200}"#;
const WEATHER_NOT_FOUND: &str = r#"{"cod":"404","message":"city not found"}"#;
const AIR_OK: &str = r#"{"list":[{"main":{"aqi":75},"components":{"co":250.34,"no":0.1,"no2":12.0,"o3":80.5,"so2":4.2,"pm2_5":30.0,"pm10":90.0}}]}"#;

struct CannedTransport {
    weather: Result<&'static str, &'static str>,
    air: Result<&'static str, &'static str>,
}

#[async_trait]
impl HttpTransport for CannedTransport {
    async fn get(&self, url: &str) -> Result<UpstreamResponse, FetchError> {
        let reply = if url.starts_with("http://upstream/weather") {
            self.weather
        } else {
            self.air
        };
        reply
            .map(|body| UpstreamResponse {
                status: 200,
                body: body.to_string(),
            })
            .map_err(FetchError::network)
    }
}

fn state(
    weather: Result<&'static str, &'static str>,
    air: Result<&'static str, &'static str>,
) -> Arc<AppState<CannedTransport>> {
    let transport = CannedTransport { weather, air };
    Arc::new(AppState {
        fetcher: AirQualityFetcher::new(
            transport,
            Endpoints {
                weather_url: "http://upstream/weather".to_string(),
                air_pollution_url: "http://upstream/air_pollution".to_string(),
            },
            "test_api_key",
        ),
        dashboard: DashboardConfig::default(),
    })
}

async fn get_json(
    state: Arc<AppState<CannedTransport>>,
    uri: &str,
) -> (StatusCode, Value) {
    let response = api::router(state)
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
}

#[tokio::test]
async fn test_air_quality_success() {
    let (status, body) = get_json(state(Ok(WEATHER_OK), Ok(AIR_OK)), "/air-quality?city=Bhopal").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["city"], "Bhopal");
    assert_eq!(body["air_quality"]["aqi"], 75);
    assert_eq!(body["category"], "moderate");
    assert_eq!(body["category_label"], "Moderate");
    assert_eq!(body["illustrative_weight"], 30);
    assert_eq!(body["weather"]["temperature_celsius"], 24.5);
    assert_eq!(body["weather"]["humidity_percent"], 60.0);
    assert_eq!(body["particulate_split"]["pm2_5_percent"], 25.0);
    assert_eq!(body["gas_series"].as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn test_city_not_found_is_404() {
    let (status, body) =
        get_json(state(Ok(WEATHER_NOT_FOUND), Ok(AIR_OK)), "/air-quality?city=Atlantis").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    let error: ApiError = serde_json::from_value(body).unwrap();
    assert_eq!(error.error, "city_not_found");
    assert!(error.message.contains("city not found"));
    assert!(error.retryable);
}

#[tokio::test]
async fn test_network_failure_is_502() {
    let (status, body) =
        get_json(state(Ok(WEATHER_OK), Err("connection reset")), "/air-quality?city=Delhi").await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["error"], "network_failure");
    assert_eq!(body["retryable"], true);
}

#[tokio::test]
async fn test_malformed_is_502() {
    let (status, body) = get_json(
        state(Ok(WEATHER_OK), Ok(r#"{"list":[]}"#)),
        "/air-quality?city=Delhi",
    )
    .await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["error"], "malformed_response");
}

#[tokio::test]
async fn test_missing_city_is_400() {
    let (status, body) = get_json(state(Ok(WEATHER_OK), Ok(AIR_OK)), "/air-quality").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "validation");
    assert_eq!(body["message"], "Invalid input: city name cannot be empty");
    assert_eq!(body["retryable"], false);

    let (status, body) =
        get_json(state(Ok(WEATHER_OK), Ok(AIR_OK)), "/air-quality?city=%20").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "validation");
}

#[test]
fn test_app_errors_map_to_status_codes() {
    let (status, Json(body)): (StatusCode, Json<ApiError>) =
        AirInsightError::validation("city name cannot be empty").into();
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body.error, "validation");

    let (status, Json(body)): (StatusCode, Json<ApiError>) =
        AirInsightError::config("no key").into();
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body.error, "config");
    assert!(!body.retryable);

    let (status, Json(body)): (StatusCode, Json<ApiError>) =
        AirInsightError::from(FetchError::city_not_found("city not found")).into();
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body.error, "city_not_found");
    assert!(body.retryable);
}

#[tokio::test]
async fn test_demo_endpoint_is_synthetic() {
    let (status, body) = get_json(state(Ok(WEATHER_OK), Ok(AIR_OK)), "/demo").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["synthetic"], true);
    assert_eq!(body["conditions"].as_array().unwrap().len(), 10);
}

#[tokio::test]
async fn test_dashboard_settings() {
    let (status, body) = get_json(state(Ok(WEATHER_OK), Ok(AIR_OK)), "/dashboard").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["default_city"], "Delhi");
    assert_eq!(body["refresh_interval_seconds"], 60);
}
