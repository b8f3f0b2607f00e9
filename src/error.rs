//! Error types for the collection browser.
//!
//! Each failing call site receives a typed error instead of a shared handler's
//! return value, so callers decide explicitly whether a failure aborts the
//! operation, is logged and skipped, or becomes an empty result.

use thiserror::Error;

/// Result type alias using our custom error types.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Top-level error type that encompasses all application errors.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration-related errors
    #[error("configuration error")]
    Config(#[from] ConfigError),

    /// Remote collection API errors
    #[error("collection API error")]
    Collection(#[from] CollectionError),

    /// Generic errors that don't fit other categories
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Configuration-related errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable parsing failed
    #[error("failed to load {target}: {message}")]
    EnvParse { target: String, message: String },

    /// Configuration value is invalid
    #[error("invalid configuration value for {field}: {message}")]
    Invalid { field: String, message: String },
}

/// Remote collection API errors.
#[derive(Error, Debug)]
pub enum CollectionError {
    /// HTTP request failed before a status was received
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Server returned a non-success status
    #[error("server error (status {status}): {message}")]
    ServerError { status: u16, message: String },

    /// The object endpoint answered 404
    #[error("object {id} not found")]
    ObjectNotFound { id: u64 },

    /// Response body was not the expected JSON document
    #[error("failed to decode response from {path}: {message}")]
    Decode { path: String, message: String },

    /// A random draw was requested from an empty identifier list
    #[error("identifier list is empty")]
    NoIdentifiers,

    /// The random draw cap was reached before enough imaged objects were found
    #[error("found {found} of {requested} imaged objects after {attempts} random draws")]
    SampleExhausted {
        requested: usize,
        found: usize,
        attempts: usize,
    },
}

impl ConfigError {
    /// Creates a new environment parse error.
    pub fn env_parse(target: impl Into<String>, err: impl std::fmt::Display) -> Self {
        Self::EnvParse {
            target: target.into(),
            message: err.to_string(),
        }
    }

    /// Creates a new invalid configuration error.
    pub fn invalid(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Invalid {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl CollectionError {
    /// Creates a server error from HTTP status and response body.
    pub fn server_error(status: reqwest::StatusCode, body: String) -> Self {
        Self::ServerError {
            status: status.as_u16(),
            message: body,
        }
    }

    /// Creates a decode error for the given request path.
    pub fn decode(path: impl Into<String>, err: impl std::fmt::Display) -> Self {
        Self::Decode {
            path: path.into(),
            message: err.to_string(),
        }
    }

    /// Whether the remote service reported the resource as missing.
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::ObjectNotFound { .. } => true,
            Self::ServerError { status, .. } => *status == 404,
            _ => false,
        }
    }
}
