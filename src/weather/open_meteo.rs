//! Open-Meteo weather client.
//!
//! Two requests per lookup: the geocoding API turns a city name into
//! coordinates, then the forecast API returns current conditions there.
//! Neither endpoint needs an API key.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

use super::{WeatherError, WeatherProvider, WeatherReport};
use crate::config::WeatherConfig;
use crate::error::{AssistantError, Result};

const CURRENT_FIELDS: &str =
    "temperature_2m,apparent_temperature,relative_humidity_2m,wind_speed_10m,weather_code";

/// Open-Meteo client.
#[derive(Debug, Clone)]
pub struct OpenMeteoClient {
    config: WeatherConfig,
    client: Client,
}

impl OpenMeteoClient {
    /// Creates a new client with the given configuration.
    pub fn new(config: WeatherConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AssistantError::weather(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    async fn get_json<T: for<'de> Deserialize<'de>>(
        &self,
        url: &str,
        query: &[(&str, String)],
    ) -> std::result::Result<T, WeatherError> {
        let response = self
            .client
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    WeatherError::Unavailable("request timed out".to_string())
                } else if e.is_connect() {
                    WeatherError::Unavailable("failed to connect".to_string())
                } else {
                    WeatherError::Unavailable(format!("request failed: {}", e))
                }
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| WeatherError::Unavailable(format!("failed to read response: {}", e)))?;

        if !status.is_success() {
            return Err(WeatherError::Unavailable(format!(
                "API error ({}): {}",
                status, body
            )));
        }

        serde_json::from_str(&body)
            .map_err(|e| WeatherError::Unavailable(format!("failed to parse response: {}", e)))
    }
}

#[derive(Debug, Deserialize)]
struct GeocodingResponse {
    #[serde(default)]
    results: Vec<Place>,
}

#[derive(Debug, Deserialize)]
struct Place {
    name: String,
    latitude: f64,
    longitude: f64,
    country: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    current: CurrentConditions,
}

#[derive(Debug, Deserialize)]
struct CurrentConditions {
    temperature_2m: f64,
    apparent_temperature: f64,
    relative_humidity_2m: f64,
    wind_speed_10m: f64,
    weather_code: u32,
}

#[async_trait]
impl WeatherProvider for OpenMeteoClient {
    async fn current(&self, city: &str) -> std::result::Result<WeatherReport, WeatherError> {
        let geo: GeocodingResponse = self
            .get_json(
                &self.config.geocoding_url,
                &[
                    ("name", city.to_string()),
                    ("count", "1".to_string()),
                    ("language", "en".to_string()),
                    ("format", "json".to_string()),
                ],
            )
            .await?;

        let place = geo
            .results
            .into_iter()
            .next()
            .ok_or_else(|| WeatherError::CityNotFound(city.to_string()))?;
        debug!(
            "Geocoded '{}' to {} ({}, {})",
            city, place.name, place.latitude, place.longitude
        );

        let forecast: ForecastResponse = self
            .get_json(
                &self.config.forecast_url,
                &[
                    ("latitude", place.latitude.to_string()),
                    ("longitude", place.longitude.to_string()),
                    ("current", CURRENT_FIELDS.to_string()),
                ],
            )
            .await?;

        let now = forecast.current;
        Ok(WeatherReport {
            city: place.name,
            country: place.country,
            temperature_c: now.temperature_2m,
            feels_like_c: now.apparent_temperature,
            humidity_pct: now.relative_humidity_2m,
            wind_kmh: now.wind_speed_10m,
            weather_code: now.weather_code,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        assert!(OpenMeteoClient::new(WeatherConfig::default()).is_ok());
    }

    #[test]
    fn test_geocoding_without_results() {
        let geo: GeocodingResponse = serde_json::from_str(r#"{"generationtime_ms":0.5}"#).unwrap();
        assert!(geo.results.is_empty());
    }

    #[test]
    fn test_forecast_parsing() {
        let body = r#"{
            "latitude": 50.45,
            "longitude": 30.52,
            "current": {
                "time": "2026-10-18T12:00",
                "temperature_2m": 9.8,
                "apparent_temperature": 7.1,
                "relative_humidity_2m": 81,
                "wind_speed_10m": 12.4,
                "weather_code": 61
            }
        }"#;
        let forecast: ForecastResponse = serde_json::from_str(body).unwrap();
        assert_eq!(forecast.current.weather_code, 61);
        assert_eq!(forecast.current.relative_humidity_2m, 81.0);
    }

    #[tokio::test]
    async fn test_unreachable_service_is_unavailable() {
        let config = WeatherConfig {
            geocoding_url: "http://127.0.0.1:9/v1/search".to_string(),
            forecast_url: "http://127.0.0.1:9/v1/forecast".to_string(),
            timeout_secs: 2,
        };
        let client = OpenMeteoClient::new(config).unwrap();
        let err = client.current("Kyiv").await.unwrap_err();
        assert!(matches!(err, WeatherError::Unavailable(_)));
    }
}
