// SensorGrid Gateway - Ingestion entry point
// Copyright (c) 2026 SensorGrid Contributors
//
// Licensed under AGPL-3.0. See LICENSE file for details.

//! Topic scheme for the message bus.
//!
//! Topics are sensor-scoped (`sensors/{sensorId}/data`) and device-scoped
//! (`devices/{deviceId}/status`). Subscription patterns use `+` as a
//! single-level wildcard.

/// Pattern matching every sensor-data topic
pub const SENSOR_DATA_PATTERN: &str = "sensors/+/data";

/// Pattern matching every device-status topic
pub const DEVICE_STATUS_PATTERN: &str = "devices/+/status";

/// A recognized, parsed topic
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Topic {
    /// `sensors/{sensorId}/data`
    SensorData { sensor_id: String },
    /// `devices/{deviceId}/status`
    DeviceStatus { device_id: String },
}

impl Topic {
    /// Build the data topic for a sensor
    pub fn sensor_data(sensor_id: &str) -> String {
        format!("sensors/{sensor_id}/data")
    }

    /// Build the status topic for a device
    pub fn device_status(device_id: &str) -> String {
        format!("devices/{device_id}/status")
    }

    /// Parse a topic string; `None` for anything outside the scheme
    pub fn parse(topic: &str) -> Option<Topic> {
        let parts: Vec<&str> = topic.split('/').collect();
        match parts.as_slice() {
            ["sensors", id, "data"] if !id.is_empty() => Some(Topic::SensorData {
                sensor_id: (*id).to_string(),
            }),
            ["devices", id, "status"] if !id.is_empty() => Some(Topic::DeviceStatus {
                device_id: (*id).to_string(),
            }),
            _ => None,
        }
    }
}

/// Match a topic against a pattern with single-level `+` wildcards
pub fn topic_matches(pattern: &str, topic: &str) -> bool {
    let pattern_parts: Vec<&str> = pattern.split('/').collect();
    let topic_parts: Vec<&str> = topic.split('/').collect();

    pattern_parts.len() == topic_parts.len()
        && pattern_parts
            .iter()
            .zip(&topic_parts)
            .all(|(p, t)| *p == "+" || p == t)
}
