use serde::Deserialize;

use crate::error::ApiError;

/// Default weather endpoint root.
pub const DEFAULT_WEATHER_BASE_URL: &str = "https://api.openweathermap.org/data/2.5";

/// Weather service configuration.
///
/// The API key is required and validated up front: a blank key is rejected
/// at construction instead of letting the remote service reject the first
/// request.
///
/// # Examples
///
/// ```
/// use etude_api::WeatherConfig;
///
/// let config = WeatherConfig::new("my-key").unwrap();
/// assert!(WeatherConfig::new("   ").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WeatherConfig {
    /// Caller-supplied service credential. Never defaulted.
    pub api_key: String,

    /// Endpoint root, overridable for tests and proxies.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    DEFAULT_WEATHER_BASE_URL.to_string()
}

impl WeatherConfig {
    /// Create a configuration for the default endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::MissingApiKey`] when the key is empty or blank.
    pub fn new(api_key: impl Into<String>) -> Result<Self, ApiError> {
        let config = Self {
            api_key: api_key.into(),
            base_url: default_base_url(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Override the endpoint root.
    #[must_use]
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Check the configuration is usable.
    ///
    /// Deserialized configurations bypass [`WeatherConfig::new`], so
    /// consumers call this before first use.
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.api_key.trim().is_empty() {
            return Err(ApiError::MissingApiKey);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_blank_keys() {
        assert!(matches!(
            WeatherConfig::new(""),
            Err(ApiError::MissingApiKey)
        ));
        assert!(matches!(
            WeatherConfig::new("  \t "),
            Err(ApiError::MissingApiKey)
        ));
    }

    #[test]
    fn test_new_defaults_base_url() {
        let config = WeatherConfig::new("key").unwrap();
        assert_eq!(config.base_url, DEFAULT_WEATHER_BASE_URL);
    }

    #[test]
    fn test_base_url_override() {
        let config = WeatherConfig::new("key")
            .unwrap()
            .base_url("http://localhost:8080");
        assert_eq!(config.base_url, "http://localhost:8080");
    }

    #[test]
    fn test_deserialized_config_still_validates() {
        let config: WeatherConfig = serde_json::from_str(r#"{"api_key": ""}"#).unwrap();
        assert!(matches!(config.validate(), Err(ApiError::MissingApiKey)));
    }

    #[test]
    fn test_deserialize_fills_default_base_url() {
        let config: WeatherConfig = serde_json::from_str(r#"{"api_key": "key"}"#).unwrap();
        assert_eq!(config.base_url, DEFAULT_WEATHER_BASE_URL);
        assert!(config.validate().is_ok());
    }
}
