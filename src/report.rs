//! Panel data for a dashboard, derived from one successful lookup

use crate::classifier::{AirQualityCategory, classify};
use crate::models::{AirQualityRecord, Pollutant, PollutantReading, WeatherSnapshot};
use serde::Serialize;
use std::fmt::Display;

/// Gaseous pollutants shown together as a line series
const GAS_SERIES: [Pollutant; 5] = [
    Pollutant::Co,
    Pollutant::No,
    Pollutant::No2,
    Pollutant::O3,
    Pollutant::So2,
];

/// Share of PM2.5 and PM10 in their combined concentration, in percent
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParticulateSplit {
    pub pm2_5_percent: f64,
    pub pm10_percent: f64,
}

impl ParticulateSplit {
    /// `None` when both are missing or they sum to zero
    #[must_use]
    pub fn from_record(record: &AirQualityRecord) -> Option<Self> {
        let pm2_5 = record.concentration(&Pollutant::Pm2_5);
        let pm10 = record.concentration(&Pollutant::Pm10);
        if pm2_5.is_none() && pm10.is_none() {
            return None;
        }

        let pm2_5 = pm2_5.unwrap_or(0.0);
        let pm10 = pm10.unwrap_or(0.0);
        let total = pm2_5 + pm10;
        if total <= 0.0 {
            return None;
        }

        Some(Self {
            pm2_5_percent: pm2_5 / total * 100.0,
            pm10_percent: pm10 / total * 100.0,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardReport {
    pub city: String,
    pub weather: WeatherSnapshot,
    pub air_quality: AirQualityRecord,
    pub category: AirQualityCategory,
    pub category_label: &'static str,
    /// Decorative sample figure attached to the category, not a statistic
    pub illustrative_weight: u8,
    pub particulate_split: Option<ParticulateSplit>,
    /// CO, NO, NO2, O3, SO2 in that order, skipping any not reported
    pub gas_series: Vec<PollutantReading>,
}

impl DashboardReport {
    #[must_use]
    pub fn build(
        city: impl Into<String>,
        weather: WeatherSnapshot,
        air_quality: AirQualityRecord,
    ) -> Self {
        let (category, illustrative_weight) = classify(air_quality.aqi);
        let particulate_split = ParticulateSplit::from_record(&air_quality);
        let gas_series = GAS_SERIES
            .iter()
            .filter_map(|pollutant| {
                air_quality
                    .concentration(pollutant)
                    .map(|concentration| PollutantReading {
                        pollutant: pollutant.clone(),
                        concentration,
                    })
            })
            .collect();

        Self {
            city: city.into(),
            weather,
            air_quality,
            category,
            category_label: category.label(),
            illustrative_weight,
            particulate_split,
            gas_series,
        }
    }
}

impl Display for DashboardReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Air quality for {}", self.city)?;
        writeln!(f, "   📍 {}", self.weather.format_coordinates())?;
        writeln!(
            f,
            "   🌫️ AQI {} ({}, illustrative weight {}%)",
            self.air_quality.aqi, self.category, self.illustrative_weight
        )?;
        writeln!(f, "   🌡️ Temperature: {}", self.weather.format_temperature())?;
        writeln!(f, "   💧 Humidity: {}", self.weather.format_humidity())?;

        if let Some(split) = &self.particulate_split {
            writeln!(
                f,
                "   PM2.5 vs PM10: {:.1}% / {:.1}%",
                split.pm2_5_percent, split.pm10_percent
            )?;
        }

        writeln!(f, "   Components (µg/m³):")?;
        for reading in &self.air_quality.components {
            writeln!(f, "      {:<6} {:>10.2}", reading.pollutant, reading.concentration)?;
        }
        Ok(())
    }
}
