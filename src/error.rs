//! Error types and handling for the `WeatherTop` application
//!
//! The conversion and summary pipeline never produces these: broken numbers degrade to absent
//! values there. Errors only come from configuration, user input, lookups and the provider.

use thiserror::Error;

/// Main error type for the `WeatherTop` application
#[derive(Error, Debug)]
pub enum WeatherTopError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Weather provider communication errors
    #[error("API error: {message}")]
    Api { message: String },

    /// Provider payloads that could not be decoded
    #[error("Parse error: {message}")]
    Parse { message: String },

    /// Input validation errors
    #[error("Invalid input: {message}")]
    Validation { message: String },

    /// Unknown station or report
    #[error("Not found: {message}")]
    NotFound { message: String },

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl WeatherTopError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new API error
    pub fn api<S: Into<String>>(message: S) -> Self {
        Self::Api {
            message: message.into(),
        }
    }

    /// Create a new parse error
    pub fn parse<S: Into<String>>(message: S) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn not_found<S: Into<String>>(message: S) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            WeatherTopError::Config { message } => {
                format!("Configuration error: {message}. Please check your config file and API key.")
            }
            WeatherTopError::Api { .. } | WeatherTopError::Parse { .. } => {
                "Could not load weather data from the provider. Please try again later.".to_string()
            }
            WeatherTopError::Validation { message } => format!("Invalid input: {message}"),
            WeatherTopError::NotFound { message } => format!("{message} not found"),
            WeatherTopError::Io { .. } => {
                "File operation failed. Please check file permissions.".to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let config_err = WeatherTopError::config("missing API key");
        assert!(matches!(config_err, WeatherTopError::Config { .. }));

        let api_err = WeatherTopError::api("connection failed");
        assert!(matches!(api_err, WeatherTopError::Api { .. }));

        let validation_err = WeatherTopError::validation("empty station name");
        assert!(matches!(validation_err, WeatherTopError::Validation { .. }));

        let missing = WeatherTopError::not_found("Station");
        assert!(matches!(missing, WeatherTopError::NotFound { .. }));
    }

    #[test]
    fn test_user_messages() {
        let config_err = WeatherTopError::config("missing openweather api key");
        assert!(config_err.user_message().contains("missing openweather api key"));

        let api_err = WeatherTopError::api("timeout");
        assert!(api_err.user_message().contains("Could not load weather data"));

        let parse_err = WeatherTopError::parse("bad json");
        assert_eq!(parse_err.user_message(), api_err.user_message());

        let validation_err = WeatherTopError::validation("test input");
        assert!(validation_err.user_message().contains("test input"));

        let missing = WeatherTopError::not_found("Station");
        assert_eq!(missing.user_message(), "Station not found");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: WeatherTopError = io_err.into();
        assert!(matches!(err, WeatherTopError::Io { .. }));
    }
}
