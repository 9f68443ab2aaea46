//! Current weather snapshot resolved from a city name

use serde::{Deserialize, Serialize};

/// Coordinates and current conditions for a looked-up city
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct WeatherSnapshot {
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
    /// Temperature in Celsius
    pub temperature_celsius: f64,
    /// Relative humidity in percent (0-100)
    pub humidity_percent: f64,
}

impl WeatherSnapshot {
    /// Format location as coordinates string
    #[must_use]
    pub fn format_coordinates(&self) -> String {
        format!("{:.4}, {:.4}", self.latitude, self.longitude)
    }

    /// Format temperature with unit
    #[must_use]
    pub fn format_temperature(&self) -> String {
        format!("{:.1}°C", self.temperature_celsius)
    }

    #[must_use]
    pub fn format_humidity(&self) -> String {
        format!("{:.0}%", self.humidity_percent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot() -> WeatherSnapshot {
        WeatherSnapshot {
            latitude: 28.666_7,
            longitude: 77.216_7,
            temperature_celsius: 31.04,
            humidity_percent: 48.0,
        }
    }

    #[test]
    fn test_format_coordinates() {
        assert_eq!(snapshot().format_coordinates(), "28.6667, 77.2167");
    }

    #[test]
    fn test_format_temperature_and_humidity() {
        let weather = snapshot();
        assert_eq!(weather.format_temperature(), "31.0°C");
        assert_eq!(weather.format_humidity(), "48%");
    }
}
