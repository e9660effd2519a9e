//! Error types for the common library.
//!
//! This module provides the error hierarchy used by the draw server,
//! built with `thiserror`.
//!
//! # Error Categories
//!
//! - `ConfigError`: Missing or invalid startup configuration
//! - `Error::Api`: Image generation API errors (includes endpoint and status)
//! - `Error::Decode`: The API returned an image payload that is not valid base64
//! - `Error::Io`: File system operations (creating the output directory, writing images)
//!
//! A response that simply carries no image is not an error; the handler
//! reports it as a normal tool result.

use thiserror::Error;

/// Errors raised while serving a tool call.
///
/// Startup problems are reported separately as [`ConfigError`] before the
/// server accepts any request.
#[derive(Debug, Error)]
pub enum Error {
    /// API errors with endpoint and HTTP status context
    ///
    /// A status code of 0 means the request never received a response.
    #[error("API error for {endpoint} (HTTP {status_code}): {message}")]
    Api {
        /// The API endpoint that was called
        endpoint: String,
        /// HTTP status code returned by the API
        status_code: u16,
        /// Error message from the API or describing the failure
        message: String,
    },

    /// Image payload could not be decoded
    #[error("Decode error: {0}")]
    Decode(String),

    /// File system I/O errors
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a new API error with endpoint, status code, and message.
    ///
    /// # Example
    ///
    /// ```
    /// use mcp_draw_common::error::Error;
    ///
    /// let err = Error::api(
    ///     "https://api.openai.com/v1/images/generations",
    ///     500,
    ///     "Internal server error"
    /// );
    /// assert!(err.to_string().contains("api.openai.com"));
    /// assert!(err.to_string().contains("500"));
    /// ```
    pub fn api(endpoint: impl Into<String>, status_code: u16, message: impl Into<String>) -> Self {
        Error::Api {
            endpoint: endpoint.into(),
            status_code,
            message: message.into(),
        }
    }

    /// Create a new decode error.
    ///
    /// # Example
    ///
    /// ```
    /// use mcp_draw_common::error::Error;
    ///
    /// let err = Error::decode("Invalid symbol 42, offset 3.");
    /// assert!(err.to_string().contains("offset 3"));
    /// ```
    pub fn decode(message: impl Into<String>) -> Self {
        Error::Decode(message.into())
    }
}

/// Configuration errors.
///
/// These errors occur while resolving command-line flags and environment
/// variables into a [`Config`](crate::config::Config) at startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No API key was supplied by flag or environment
    #[error("The {0} environment variable is missing or empty; either provide it, or pass --api-key")]
    MissingApiKey(String),

    /// A flag or environment variable has an invalid value
    #[error("Invalid value for {0}: {1}")]
    InvalidValue(String, String),
}

impl ConfigError {
    /// Create a new missing API key error naming the environment variable consulted.
    pub fn missing_api_key(env_var: impl Into<String>) -> Self {
        ConfigError::MissingApiKey(env_var.into())
    }

    /// Create a new invalid value error.
    pub fn invalid_value(name: impl Into<String>, reason: impl Into<String>) -> Self {
        ConfigError::InvalidValue(name.into(), reason.into())
    }
}
