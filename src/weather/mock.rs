//! Mock weather provider for testing.

use async_trait::async_trait;
use std::collections::HashMap;

use super::{WeatherError, WeatherProvider, WeatherReport};

/// Answers from a fixed table; unknown cities are "not found".
#[derive(Debug, Clone, Default)]
pub struct MockWeatherProvider {
    reports: HashMap<String, WeatherReport>,
    offline: bool,
}

impl MockWeatherProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a canned report, matched case-insensitively by city name.
    pub fn with_report(mut self, report: WeatherReport) -> Self {
        self.reports.insert(report.city.to_lowercase(), report);
        self
    }

    /// Makes every lookup fail as if the network were down.
    pub fn offline(mut self) -> Self {
        self.offline = true;
        self
    }
}

#[async_trait]
impl WeatherProvider for MockWeatherProvider {
    async fn current(&self, city: &str) -> Result<WeatherReport, WeatherError> {
        if self.offline {
            return Err(WeatherError::Unavailable("failed to connect".to_string()));
        }
        self.reports
            .get(&city.to_lowercase())
            .cloned()
            .ok_or_else(|| WeatherError::CityNotFound(city.to_string()))
    }
}
