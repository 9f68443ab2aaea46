//! Air quality record and pollutant identifiers

use serde::{Serialize, Serializer};
use std::fmt::Display;

/// Pollutant reported by the air pollution endpoint
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Pollutant {
    Co,
    No,
    No2,
    O3,
    So2,
    Pm2_5,
    Pm10,
    Nh3,
    /// Any key the upstream adds that is not known here, kept verbatim
    Other(String),
}

impl Pollutant {
    /// Map an upstream component key (`pm2_5`, `no2`, ...) to a pollutant
    #[must_use]
    pub fn from_key(key: &str) -> Self {
        match key {
            "co" => Pollutant::Co,
            "no" => Pollutant::No,
            "no2" => Pollutant::No2,
            "o3" => Pollutant::O3,
            "so2" => Pollutant::So2,
            "pm2_5" => Pollutant::Pm2_5,
            "pm10" => Pollutant::Pm10,
            "nh3" => Pollutant::Nh3,
            other => Pollutant::Other(other.to_string()),
        }
    }

    /// Display symbol, e.g. `PM2.5`
    #[must_use]
    pub fn symbol(&self) -> &str {
        match self {
            Pollutant::Co => "CO",
            Pollutant::No => "NO",
            Pollutant::No2 => "NO2",
            Pollutant::O3 => "O3",
            Pollutant::So2 => "SO2",
            Pollutant::Pm2_5 => "PM2.5",
            Pollutant::Pm10 => "PM10",
            Pollutant::Nh3 => "NH3",
            Pollutant::Other(key) => key,
        }
    }
}

impl Display for Pollutant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.symbol())
    }
}

impl Serialize for Pollutant {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.symbol())
    }
}

/// One concentration measurement in µg/m³
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PollutantReading {
    pub pollutant: Pollutant,
    pub concentration: f64,
}

/// AQI and component concentrations at a coordinate
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AirQualityRecord {
    /// Upstream air quality index
    pub aqi: i64,
    /// Readings in the order the upstream reported them
    pub components: Vec<PollutantReading>,
}

impl AirQualityRecord {
    /// Concentration of a pollutant, if it was reported
    #[must_use]
    pub fn concentration(&self, pollutant: &Pollutant) -> Option<f64> {
        self.components
            .iter()
            .find(|reading| &reading.pollutant == pollutant)
            .map(|reading| reading.concentration)
    }
}
