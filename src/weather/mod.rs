//! Weather lookup.
//!
//! Provides the [`WeatherProvider`] trait and an Open-Meteo implementation.

pub mod mock;
pub mod open_meteo;

pub use mock::MockWeatherProvider;
pub use open_meteo::OpenMeteoClient;

use async_trait::async_trait;
use std::fmt;
use thiserror::Error;

/// Why a weather lookup failed.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum WeatherError {
    /// The geocoder knows no such place.
    #[error("city '{0}' not found")]
    CityNotFound(String),

    /// Network, HTTP status or decoding failure.
    #[error("{0}")]
    Unavailable(String),
}

/// Current conditions in a city.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherReport {
    pub city: String,
    pub country: Option<String>,
    pub temperature_c: f64,
    pub feels_like_c: f64,
    pub humidity_pct: f64,
    pub wind_kmh: f64,
    pub weather_code: u32,
}

impl WeatherReport {
    /// Human-readable description of the WMO weather code.
    pub fn description(&self) -> &'static str {
        describe_weather_code(self.weather_code)
    }
}

impl fmt::Display for WeatherReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.country {
            Some(country) => writeln!(f, "Weather in {}, {}:", self.city, country)?,
            None => writeln!(f, "Weather in {}:", self.city)?,
        }
        writeln!(f, "  {}", self.description())?;
        writeln!(
            f,
            "  Temperature: {:.1}°C (feels like {:.1}°C)",
            self.temperature_c, self.feels_like_c
        )?;
        writeln!(f, "  Humidity: {:.0}%", self.humidity_pct)?;
        write!(f, "  Wind: {:.1} km/h", self.wind_kmh)
    }
}

/// Maps a WMO weather interpretation code to a short description.
pub fn describe_weather_code(code: u32) -> &'static str {
    match code {
        0 => "Clear sky",
        1 => "Mainly clear",
        2 => "Partly cloudy",
        3 => "Overcast",
        45 | 48 => "Fog",
        51 | 53 | 55 => "Drizzle",
        56 | 57 => "Freezing drizzle",
        61 | 63 | 65 => "Rain",
        66 | 67 => "Freezing rain",
        71 | 73 | 75 => "Snow fall",
        77 => "Snow grains",
        80..=82 => "Rain showers",
        85 | 86 => "Snow showers",
        95 => "Thunderstorm",
        96 | 99 => "Thunderstorm with hail",
        _ => "Unknown conditions",
    }
}

/// Trait for services that report current weather.
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    /// Looks up current conditions for a city name.
    async fn current(&self, city: &str) -> Result<WeatherReport, WeatherError>;
}
