//! Core error types for cyclesync-core.
//!
//! This module defines the error hierarchy using thiserror. The pure
//! planning functions (cycle math, window building, distribution, export)
//! are total and never return errors; everything here belongs to the
//! storage, validation, and advice-gateway boundaries.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for cyclesync-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Advice gateway errors
    #[error("Advice error: {0}")]
    Advice(#[from] AdviceError),

    /// Persisted-state errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Advice-gateway errors.
///
/// Every variant renders as a short generic message; callers surface the
/// message as-is and never branch on structured error codes.
#[derive(Error, Debug)]
pub enum AdviceError {
    /// Transport failure (connection, timeout, non-2xx status)
    #[error("could not reach the advice service")]
    Http(#[from] reqwest::Error),

    /// Response body was not the expected day-plan shape
    #[error("the advice service returned an unreadable response")]
    Parse(#[source] serde_json::Error),

    /// Gateway endpoint not configured
    #[error("advice service is not configured (set {env_var})")]
    NotConfigured { env_var: &'static str },
}

/// Persisted-state errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load persisted state
    #[error("Failed to load {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save persisted state
    #[error("Failed to save {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Failed to parse persisted state
    #[error("Failed to parse persisted state: {0}")]
    ParseFailed(String),

    /// Data directory could not be resolved or created
    #[error("Data directory unavailable: {0}")]
    DataDir(String),
}

/// Validation errors raised during onboarding.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Invalid field value
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue { field: String, message: String },

    /// Cycle length outside the accepted onboarding range
    #[error("Cycle length {value} is outside the supported range {min}-{max}")]
    CycleLengthOutOfRange { value: u32, min: u32, max: u32 },
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
