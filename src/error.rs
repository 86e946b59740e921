//! Custom error types for the sense-logger application.
//!
//! This module defines domain-specific error types using thiserror,
//! providing clear error messages and proper error context propagation.

use thiserror::Error;

/// Errors related to sensor reads
#[derive(Debug, Error)]
pub enum SensorError {
    #[error("sensor read failed: {0}")]
    ReadError(String),

    #[error("sensor unavailable: {0}")]
    Unavailable(String),
}

/// Errors related to the LED matrix display
#[derive(Debug, Error)]
pub enum DisplayError {
    #[error("display initialization failed: {0}")]
    InitializationError(String),

    #[error("display rendering failed: {0}")]
    RenderError(String),
}

/// Errors related to the joystick event source
#[derive(Debug, Error)]
pub enum InputError {
    #[error("event source failed: {0}")]
    EventError(String),

    #[error("event source closed")]
    Closed,
}

/// Errors related to the host power interface
#[derive(Debug, Error)]
pub enum PowerError {
    #[error("shutdown invocation failed: {0}")]
    ShutdownError(String),
}

/// Application-level errors that can wrap other error types
#[derive(Debug, Error)]
pub enum AppError {
    #[error("sensor error: {0}")]
    Sensor(#[from] SensorError),

    #[error("display error: {0}")]
    Display(#[from] DisplayError),

    #[error("input error: {0}")]
    Input(#[from] InputError),

    #[error("power error: {0}")]
    Power(#[from] PowerError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("other error: {0}")]
    Other(#[from] anyhow::Error),
}

/// Convenience type alias for Results using AppError
pub type Result<T> = std::result::Result<T, AppError>;
