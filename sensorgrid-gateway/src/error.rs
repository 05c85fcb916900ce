// SensorGrid Gateway - Ingestion entry point
// Copyright (c) 2026 SensorGrid Contributors
//
// Licensed under AGPL-3.0. See LICENSE file for details.

//! Error types for the ingestion gateway

use thiserror::Error;

use crate::bus::BusError;

/// Main error type for gateway operations
#[derive(Error, Debug)]
pub enum GatewayError {
    /// Store-level failure (unknown sensor, provisioning validation)
    #[error("Store error: {0}")]
    Store(#[from] sensorgrid::Error),

    /// Malformed ingestion input; dropped without retry
    #[error("Invalid payload: {0}")]
    InvalidPayload(String),

    /// Bus-level failure; publish failures are transient and discarded
    #[error("Bus error: {0}")]
    Bus(#[from] BusError),
}

/// Result type alias for gateway operations
pub type Result<T> = std::result::Result<T, GatewayError>;
