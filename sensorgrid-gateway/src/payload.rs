// SensorGrid Gateway - Ingestion entry point
// Copyright (c) 2026 SensorGrid Contributors
//
// Licensed under AGPL-3.0. See LICENSE file for details.

//! Wire payloads carried on bus topics.
//!
//! Both payloads are JSON. Anything that fails to parse maps to
//! [`GatewayError::InvalidPayload`] and is dropped by the ingestion path;
//! a single bad sample must never stall the channel.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use sensorgrid::{DeviceStatus, Quality};

use crate::error::{GatewayError, Result};

/// Body of a `sensors/{sensorId}/data` message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPayload {
    /// Measured value
    pub value: f64,
    /// Quality tag; `good` when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quality: Option<Quality>,
    /// Measurement time; append-time when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
}

impl DataPayload {
    /// Create a payload carrying only a value
    pub fn new(value: f64) -> Self {
        Self {
            value,
            quality: None,
            timestamp: None,
        }
    }

    /// Set the quality tag
    pub fn with_quality(mut self, quality: Quality) -> Self {
        self.quality = Some(quality);
        self
    }

    /// Set the measurement timestamp
    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    /// Parse and validate a JSON payload
    ///
    /// # Errors
    ///
    /// `InvalidPayload` for malformed JSON, an unknown quality tag, an
    /// unparseable timestamp, or a non-finite value.
    pub fn from_json(bytes: &[u8]) -> Result<Self> {
        let payload: DataPayload = serde_json::from_slice(bytes)
            .map_err(|e| GatewayError::InvalidPayload(e.to_string()))?;
        if !payload.value.is_finite() {
            return Err(GatewayError::InvalidPayload(
                "value is not a finite number".to_string(),
            ));
        }
        Ok(payload)
    }

    /// Encode as JSON bytes
    pub fn to_json(&self) -> Vec<u8> {
        serde_json::to_vec(self).unwrap_or_default()
    }
}

/// Body of a `devices/{deviceId}/status` message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusPayload {
    /// Reported device status
    pub status: DeviceStatus,
}

impl StatusPayload {
    /// Create a status payload
    pub fn new(status: DeviceStatus) -> Self {
        Self { status }
    }

    /// Parse a JSON payload
    pub fn from_json(bytes: &[u8]) -> Result<Self> {
        serde_json::from_slice(bytes).map_err(|e| GatewayError::InvalidPayload(e.to_string()))
    }

    /// Encode as JSON bytes
    pub fn to_json(&self) -> Vec<u8> {
        serde_json::to_vec(self).unwrap_or_default()
    }
}
