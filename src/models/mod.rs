//! Data models for `AirInsight`
//!
//! - Weather: coordinates plus current temperature and humidity for a city
//! - Air quality: AQI and pollutant concentrations at those coordinates

pub mod air_quality;
pub mod weather;

pub use air_quality::{AirQualityRecord, Pollutant, PollutantReading};
pub use weather::WeatherSnapshot;
