//! Air quality lookup by city name
//!
//! One lookup is two sequential upstream calls: the current-weather endpoint
//! resolves the city to coordinates (and gives temperature and humidity),
//! then the air pollution endpoint is queried at those coordinates. There is
//! no retry and no cache; each call is an independent attempt.

use crate::config::AirInsightConfig;
use crate::models::{AirQualityRecord, WeatherSnapshot};
use crate::openweather;
use crate::transport::{HttpTransport, ReqwestTransport, redact_url};
use crate::{AirInsightError, FetchError};
use std::time::Instant;
use tracing::{debug, info, instrument, warn};

/// Reject a blank city name before any upstream call is made
pub fn validate_city_name(city_name: &str) -> crate::Result<()> {
    if city_name.trim().is_empty() {
        return Err(AirInsightError::validation("city name cannot be empty"));
    }
    Ok(())
}

/// Upstream endpoints without query strings
#[derive(Debug, Clone)]
pub struct Endpoints {
    pub weather_url: String,
    pub air_pollution_url: String,
}

pub struct AirQualityFetcher<T: HttpTransport = ReqwestTransport> {
    transport: T,
    endpoints: Endpoints,
    api_key: String,
}

impl AirQualityFetcher<ReqwestTransport> {
    /// Build a reqwest-backed fetcher. Fails when no API key is configured.
    pub fn from_config(config: &AirInsightConfig) -> Result<Self, AirInsightError> {
        let api_key = config.require_api_key()?.to_string();
        let transport = ReqwestTransport::new(config.api.timeout())?;
        Ok(Self::new(
            transport,
            Endpoints {
                weather_url: config.api.weather_url.clone(),
                air_pollution_url: config.api.air_pollution_url.clone(),
            },
            api_key,
        ))
    }
}

impl<T: HttpTransport> AirQualityFetcher<T> {
    pub fn new(transport: T, endpoints: Endpoints, api_key: impl Into<String>) -> Self {
        Self {
            transport,
            endpoints,
            api_key: api_key.into(),
        }
    }

    /// Resolve `city` and look up the air quality there.
    ///
    /// The city name is passed to the upstream unchanged apart from URL
    /// encoding. If the city lookup fails the air pollution endpoint is
    /// never called.
    #[instrument(skip(self))]
    pub async fn fetch(
        &self,
        city_name: &str,
    ) -> Result<(WeatherSnapshot, AirQualityRecord), FetchError> {
        let start = Instant::now();
        let result = self.fetch_inner(city_name).await;

        match &result {
            Ok((weather, record)) => info!(
                "Fetched AQI {} for '{}' ({}) in {:.3}s",
                record.aqi,
                city_name,
                weather.format_coordinates(),
                start.elapsed().as_secs_f64()
            ),
            Err(e) => warn!("Error fetching data for '{}': {}", city_name, e),
        }

        result
    }

    async fn fetch_inner(
        &self,
        city_name: &str,
    ) -> Result<(WeatherSnapshot, AirQualityRecord), FetchError> {
        let weather = self.lookup_weather(city_name).await?;
        let air_quality = self
            .lookup_air_quality(weather.latitude, weather.longitude)
            .await?;
        Ok((weather, air_quality))
    }

    async fn lookup_weather(&self, city_name: &str) -> Result<WeatherSnapshot, FetchError> {
        let url = self.weather_url(city_name);
        debug!("Weather lookup: {}", redact_url(&url));

        let response = self.transport.get(&url).await?;
        log_unexpected_status("Weather", response.status);
        let value = openweather::parse_body(&response.body, "Weather")?;
        openweather::check_weather_status(&value)?;
        WeatherSnapshot::try_from(value)
    }

    async fn lookup_air_quality(&self, lat: f64, lon: f64) -> Result<AirQualityRecord, FetchError> {
        let url = self.air_pollution_url(lat, lon);
        debug!("Air pollution lookup: {}", redact_url(&url));

        let response = self.transport.get(&url).await?;
        log_unexpected_status("Air pollution", response.status);
        let value = openweather::parse_body(&response.body, "Air pollution")?;
        AirQualityRecord::try_from(value)
    }

    fn weather_url(&self, city_name: &str) -> String {
        format!(
            "{}?q={}&appid={}&units=metric",
            self.endpoints.weather_url,
            urlencoding::encode(city_name),
            urlencoding::encode(&self.api_key)
        )
    }

    fn air_pollution_url(&self, lat: f64, lon: f64) -> String {
        format!(
            "{}?lat={}&lon={}&appid={}",
            self.endpoints.air_pollution_url,
            lat,
            lon,
            urlencoding::encode(&self.api_key)
        )
    }
}

/// The body decides the outcome; a non-2xx status is only reported
fn log_unexpected_status(what: &str, status: u16) {
    if !(200..300).contains(&status) {
        warn!("{} lookup returned HTTP {}", what, status);
    }
}
