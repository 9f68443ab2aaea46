//! `AirInsight` - air quality and current weather by city name
//!
//! Resolves a city through the current-weather endpoint, looks up air
//! pollution at the resulting coordinates and buckets the AQI into a fixed
//! set of categories. A small JSON API exposes the result to a dashboard.

pub mod api;
pub mod classifier;
pub mod config;
pub mod demo;
pub mod error;
pub mod fetcher;
pub mod logging;
pub mod models;
pub mod openweather;
pub mod report;
pub mod transport;
pub mod web;

// Re-export core types for public API
pub use classifier::{AirQualityCategory, classify};
pub use config::AirInsightConfig;
pub use error::{AirInsightError, FetchError};
pub use fetcher::{AirQualityFetcher, Endpoints};
pub use models::{AirQualityRecord, Pollutant, PollutantReading, WeatherSnapshot};
pub use report::DashboardReport;
pub use transport::{HttpTransport, ReqwestTransport, UpstreamResponse};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, AirInsightError>;
