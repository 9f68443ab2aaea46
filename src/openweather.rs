//! `OpenWeatherMap` response structures and conversion into domain models

use crate::FetchError;
use crate::models::{AirQualityRecord, Pollutant, PollutantReading, WeatherSnapshot};
use serde::Deserialize;
use serde_json::{Map, Value};

/// Current weather response. Only the fields we read are modelled.
#[derive(Debug, Deserialize)]
pub struct CurrentWeatherResponse {
    pub coord: Coord,
    pub main: MainReadings,
}

#[derive(Debug, Deserialize)]
pub struct Coord {
    pub lat: f64,
    pub lon: f64,
}

#[derive(Debug, Deserialize)]
pub struct MainReadings {
    /// Celsius when requested with `units=metric`
    pub temp: f64,
    pub humidity: f64,
}

/// Air pollution response
#[derive(Debug, Deserialize)]
pub struct AirPollutionResponse {
    pub list: Vec<AirPollutionEntry>,
}

#[derive(Debug, Deserialize)]
pub struct AirPollutionEntry {
    pub main: AqiReading,
    pub components: Map<String, Value>,
}

#[derive(Debug, Deserialize)]
pub struct AqiReading {
    pub aqi: i64,
}

/// Parse a body as JSON. Non-JSON bodies are transport failures.
pub fn parse_body(body: &str, what: &str) -> Result<Value, FetchError> {
    serde_json::from_str(body)
        .map_err(|e| FetchError::network(format!("{what} response is not JSON: {e}")))
}

/// `cod` is a number on success and a string such as `"404"` on failure
fn status_code(value: &Value) -> Option<i64> {
    match value.get("cod")? {
        Value::Number(number) => number.as_i64(),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }
}

/// Fail with [`FetchError::CityNotFound`] unless `cod` is 200
pub fn check_weather_status(value: &Value) -> Result<(), FetchError> {
    if status_code(value) == Some(200) {
        return Ok(());
    }

    let message = value
        .get("message")
        .and_then(Value::as_str)
        .unwrap_or("weather lookup failed");
    Err(FetchError::city_not_found(message))
}

impl TryFrom<Value> for WeatherSnapshot {
    type Error = FetchError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let response: CurrentWeatherResponse = serde_json::from_value(value)
            .map_err(|e| FetchError::malformed(format!("Invalid weather payload: {e}")))?;

        Ok(WeatherSnapshot {
            latitude: response.coord.lat,
            longitude: response.coord.lon,
            temperature_celsius: response.main.temp,
            humidity_percent: response.main.humidity,
        })
    }
}

impl TryFrom<Value> for AirQualityRecord {
    type Error = FetchError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let response: AirPollutionResponse = serde_json::from_value(value)
            .map_err(|e| FetchError::malformed(format!("Invalid air pollution payload: {e}")))?;

        let entry = response
            .list
            .into_iter()
            .next()
            .ok_or_else(|| FetchError::malformed("Air pollution payload has an empty list"))?;

        if entry.components.is_empty() {
            return Err(FetchError::malformed(
                "Air pollution payload has no components",
            ));
        }

        let components = entry
            .components
            .into_iter()
            .map(|(key, value)| {
                let concentration = value.as_f64().ok_or_else(|| {
                    FetchError::malformed(format!("Component '{key}' is not a number: {value}"))
                })?;
                Ok(PollutantReading {
                    pollutant: Pollutant::from_key(&key),
                    concentration,
                })
            })
            .collect::<Result<Vec<_>, FetchError>>()?;

        Ok(AirQualityRecord {
            aqi: entry.main.aqi,
            components,
        })
    }
}
