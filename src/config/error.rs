//! Error types for configuration loading and validation.

use thiserror::Error;

/// Raised while reading configuration from the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read configuration: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("configuration rejected: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Raised by the semantic validation pass over loaded configuration.
///
/// Setting names follow the environment-variable convention without the
/// service prefix, e.g. `AI__API_KEY`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("required setting missing: {0}")]
    MissingRequired(&'static str),

    #[error("server port must be non-zero")]
    InvalidPort,

    #[error("timeout out of range: {0}")]
    InvalidTimeout(&'static str),

    #[error("request timeout must exceed the completion timeout")]
    RequestTimeoutTooShort,

    #[error("completion base URL must start with http:// or https://")]
    InvalidBaseUrl,

    #[error("completion model must not be empty")]
    EmptyModel,
}
