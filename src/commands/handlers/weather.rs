//! Weather handler. The only command that suspends.

use async_trait::async_trait;
use tracing::warn;

use super::{Handler, Params};
use crate::commands::output::CommandOutput;
use crate::error::{HandlerError, HandlerResult};
use crate::session::Session;
use crate::weather::WeatherError;

/// Handle weather: city name, possibly several words.
pub struct WeatherHandler;

#[async_trait]
impl Handler for WeatherHandler {
    async fn call(&self, session: &mut Session, params: &Params) -> HandlerResult<CommandOutput> {
        let city = params.joined_from(0, "city")?;
        match session.weather.current(&city).await {
            Ok(report) => Ok(CommandOutput::info(report.to_string())),
            Err(WeatherError::CityNotFound(city)) => {
                Err(HandlerError::not_found(format!("city '{city}'")))
            }
            Err(WeatherError::Unavailable(detail)) => {
                warn!("Weather lookup for {city} failed: {detail}");
                Ok(CommandOutput::info(format!(
                    "Weather service unavailable: {detail}"
                )))
            }
        }
    }
}
