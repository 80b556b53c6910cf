use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};

use etude_poll::{PollOptions, poll};

use crate::config::WeatherConfig;
use crate::error::ApiError;
use crate::transport::ApiTransport;

const KELVIN_OFFSET: f64 = 273.5;

/// Converts a Kelvin reading to Fahrenheit.
///
/// # Examples
///
/// ```
/// use etude_api::kelvin_to_fahrenheit;
///
/// assert!((kelvin_to_fahrenheit(300.0) - 79.7).abs() < 1e-9);
/// ```
pub fn kelvin_to_fahrenheit(kelvin: f64) -> f64 {
    9.0 / 5.0 * (kelvin - KELVIN_OFFSET) + 32.0
}

/// The subset of the current-conditions document the client consumes.
/// Unknown fields are ignored.
#[derive(Debug, Deserialize)]
struct CurrentConditions {
    name: String,
    sys: SunTimes,
    main: Thermals,
}

#[derive(Debug, Deserialize)]
struct SunTimes {
    sunrise: i64,
    sunset: i64,
}

#[derive(Debug, Deserialize)]
struct Thermals {
    temp: f64,
}

/// One simplified weather snapshot, derived once per successful fetch and
/// never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReport {
    /// Location name as reported by the service.
    pub location: String,
    /// Sunrise as a local-clock time string.
    pub sunrise: String,
    /// Sunset as a local-clock time string.
    pub sunset: String,
    /// Temperature in Fahrenheit.
    pub temperature: f64,
    /// Local timestamp of the fetch that produced this report.
    pub time: String,
}

/// Current-conditions client, generic over the HTTP transport.
#[derive(Debug, Clone)]
pub struct WeatherClient<T> {
    config: WeatherConfig,
    transport: T,
}

impl<T: ApiTransport> WeatherClient<T> {
    /// Create a client after validating the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::MissingApiKey`] when the configured key is blank.
    pub fn new(config: WeatherConfig, transport: T) -> Result<Self, ApiError> {
        config.validate()?;
        Ok(Self { config, transport })
    }

    /// Fetch current conditions for a postal code and derive one report.
    ///
    /// # Errors
    ///
    /// Transport failures, malformed documents, and out-of-range sun times
    /// all propagate; nothing is retried or defaulted.
    pub async fn current(&self, zip: &str) -> Result<WeatherReport, ApiError> {
        let url = format!(
            "{}/weather?zip={}&appid={}",
            self.config.base_url, zip, self.config.api_key
        );
        tracing::debug!(%zip, "fetching current conditions");

        let document = self.transport.get_json(&url).await?;
        let conditions: CurrentConditions = serde_json::from_value(document)?;

        Ok(WeatherReport {
            location: conditions.name,
            sunrise: local_clock_time(conditions.sys.sunrise)?,
            sunset: local_clock_time(conditions.sys.sunset)?,
            temperature: kelvin_to_fahrenheit(conditions.main.temp),
            time: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        })
    }

    /// Fetch current conditions once per tick on a bounded schedule.
    ///
    /// Delegates scheduling to [`etude_poll::poll`]: the first fetch fires
    /// immediately, reports arrive in tick order, and the first failed
    /// fetch aborts the whole watch with its tick index.
    pub async fn watch(
        &self,
        zip: &str,
        options: PollOptions,
    ) -> Result<Vec<WeatherReport>, ApiError> {
        poll(options, || self.current(zip))
            .await
            .map_err(ApiError::from)
    }
}

/// Renders epoch seconds as a local-clock time string.
fn local_clock_time(epoch_seconds: i64) -> Result<String, ApiError> {
    let utc = DateTime::<Utc>::from_timestamp(epoch_seconds, 0)
        .ok_or(ApiError::InvalidTimestamp(epoch_seconds))?;
    Ok(utc.with_timezone(&Local).format("%H:%M:%S").to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kelvin_to_fahrenheit_round_figures() {
        assert!((kelvin_to_fahrenheit(273.5) - 32.0).abs() < f64::EPSILON);
        assert!((kelvin_to_fahrenheit(300.0) - 79.7).abs() < 1e-9);
    }

    #[test]
    fn test_local_clock_time_shape() {
        let rendered = local_clock_time(1_700_000_000).unwrap();
        // HH:MM:SS regardless of the host timezone.
        assert_eq!(rendered.len(), 8);
        assert_eq!(rendered.as_bytes()[2], b':');
        assert_eq!(rendered.as_bytes()[5], b':');
    }

    #[test]
    fn test_local_clock_time_out_of_range() {
        assert!(matches!(
            local_clock_time(i64::MAX),
            Err(ApiError::InvalidTimestamp(_))
        ));
    }
}
