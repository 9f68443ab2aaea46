//! Error types and handling for `AirInsight`

use thiserror::Error;

/// Failure of a single air quality lookup.
///
/// Every variant is recoverable: the caller shows placeholder output and
/// tries again on its next refresh.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The weather lookup reported a non-success `cod`
    #[error("City not found: {message}")]
    CityNotFound { message: String },

    /// Transport failure on either upstream call
    #[error("Network failure: {message}")]
    NetworkFailure { message: String },

    /// Upstream payload is missing expected fields
    #[error("Malformed response: {message}")]
    MalformedResponse { message: String },
}

impl FetchError {
    pub fn city_not_found<S: Into<String>>(message: S) -> Self {
        Self::CityNotFound {
            message: message.into(),
        }
    }

    pub fn network<S: Into<String>>(message: S) -> Self {
        Self::NetworkFailure {
            message: message.into(),
        }
    }

    pub fn malformed<S: Into<String>>(message: S) -> Self {
        Self::MalformedResponse {
            message: message.into(),
        }
    }

    /// Whether the caller can simply try again on its next refresh.
    /// No lookup failure ends the process.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        match self {
            FetchError::CityNotFound { .. }
            | FetchError::NetworkFailure { .. }
            | FetchError::MalformedResponse { .. } => true,
        }
    }

    /// Short machine-readable name of the error kind
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            FetchError::CityNotFound { .. } => "city_not_found",
            FetchError::NetworkFailure { .. } => "network_failure",
            FetchError::MalformedResponse { .. } => "malformed_response",
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            FetchError::CityNotFound { message } => {
                format!("City not found ({message}). Please check the spelling.")
            }
            FetchError::NetworkFailure { .. } => {
                "Unable to reach the weather service. Please check your internet connection."
                    .to_string()
            }
            FetchError::MalformedResponse { .. } => {
                "The weather service returned incomplete data. Please try again later.".to_string()
            }
        }
    }
}

/// Main error type for the `AirInsight` application
#[derive(Error, Debug)]
pub enum AirInsightError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Input validation errors
    #[error("Invalid input: {message}")]
    Validation { message: String },

    /// Upstream lookup errors
    #[error(transparent)]
    Fetch(#[from] FetchError),
}

impl AirInsightError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            AirInsightError::Config { .. } => {
                "Configuration error. Please check your config file and API key.".to_string()
            }
            AirInsightError::Validation { message } => {
                format!("Invalid input: {message}")
            }
            AirInsightError::Fetch(err) => err.user_message(),
        }
    }
}
