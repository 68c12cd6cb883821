//! Error types for decoding, route fetching, configuration and passage math.

use thiserror::Error;

/// Malformed or truncated encoded polyline.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    #[error("polyline truncated: value starting at index {index} has no terminating character")]
    Truncated { index: usize },

    #[error("invalid polyline character {byte:#04x} at index {index}")]
    InvalidCharacter { index: usize, byte: u8 },

    #[error("polyline value starting at index {index} overflows 64 bits")]
    Overflow { index: usize },
}

/// Failure while fetching a route from the directions service.
#[derive(Error, Debug)]
pub enum RouteError {
    /// Built through [`RouteError::request`] so the URL, and the key in its
    /// query, never reach a log line.
    #[error("directions request failed: {0}")]
    Request(reqwest::Error),

    #[error("directions service returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("failed to parse directions response: {0}")]
    Parse(#[from] serde_json::Error),

    // Google reports quota and key problems with HTTP 200 and a status field.
    #[error("directions service status {status}: {}", .message.as_deref().unwrap_or("no message"))]
    Api {
        status: String,
        message: Option<String>,
    },

    #[error("route geometry is corrupt: {0}")]
    Decode(#[from] DecodeError),
}

impl RouteError {
    /// Wraps a transport error with its request URL stripped.
    pub fn request(err: reqwest::Error) -> Self {
        Self::Request(err.without_url())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {name}: {value}")]
    InvalidValue { name: String, value: String },
}

#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum PassageError {
    #[error("need at least two of speed, time and distance")]
    Underdetermined,

    #[error("{field} must be a finite, non-negative number (got {value})")]
    InvalidInput { field: &'static str, value: f64 },

    #[error("cannot divide by zero {field}")]
    ZeroDivisor { field: &'static str },
}
