// SensorGrid - Station telemetry pipeline
// Copyright (c) 2026 SensorGrid Contributors
//
// Licensed under AGPL-3.0. See LICENSE file for details.

//! Error types for the sensorgrid core.

use thiserror::Error;

/// Result type alias for core pipeline operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for store and directory operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Sensor id does not resolve to a registered, non-deleted sensor
    #[error("Sensor not found: {0}")]
    SensorNotFound(String),

    /// Sensor id is already registered
    #[error("Sensor already exists: {0}")]
    SensorAlreadyExists(String),

    /// Device id does not resolve to a known device
    #[error("Device not found: {0}")]
    DeviceNotFound(String),

    /// Sensor failed provisioning validation
    #[error("Invalid sensor {id}: {reason}")]
    InvalidSensor { id: String, reason: String },
}
