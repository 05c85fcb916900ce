// SensorGrid - Station telemetry pipeline
// Copyright (c) 2026 SensorGrid Contributors
//
// Licensed under AGPL-3.0. See LICENSE file for details.

//! Sensor metadata types.
//!
//! A [`Sensor`] describes one logical measurement point. Its readings are
//! held separately by the [`SensorStore`](crate::store::SensorStore).

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Semantic type of a sensor.
///
/// Stored explicitly and consulted directly by the alert evaluator and the
/// synthetic generator; never inferred from the display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SensorType {
    Temperature,
    Humidity,
    Pressure,
    Light,
    Noise,
    AirQuality,
    WindSpeed,
    Rainfall,
}

impl SensorType {
    /// All sensor types, in declaration order
    pub const ALL: [SensorType; 8] = [
        SensorType::Temperature,
        SensorType::Humidity,
        SensorType::Pressure,
        SensorType::Light,
        SensorType::Noise,
        SensorType::AirQuality,
        SensorType::WindSpeed,
        SensorType::Rainfall,
    ];

    /// String form used on the wire and in topic payloads
    pub fn as_str(&self) -> &'static str {
        match self {
            SensorType::Temperature => "temperature",
            SensorType::Humidity => "humidity",
            SensorType::Pressure => "pressure",
            SensorType::Light => "light",
            SensorType::Noise => "noise",
            SensorType::AirQuality => "air_quality",
            SensorType::WindSpeed => "wind_speed",
            SensorType::Rainfall => "rainfall",
        }
    }
}

impl fmt::Display for SensorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Operational status of a sensor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SensorStatus {
    /// Producing data; picked up by the synthetic generator
    #[default]
    Active,
    /// Provisioned but intentionally quiet
    Inactive,
    /// Faulted
    Error,
}

/// Metadata for one logical measurement point
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sensor {
    /// Opaque unique identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Semantic type
    #[serde(rename = "type")]
    pub sensor_type: SensorType,
    /// Unit string, e.g. `°C` or `hPa`
    pub unit: String,
    /// Declared lower bound, if any
    pub min_value: Option<f64>,
    /// Declared upper bound, if any
    pub max_value: Option<f64>,
    /// Operational status
    pub status: SensorStatus,
    /// Desired sampling cadence in seconds (>= 1). Stored for callers; the
    /// synthetic generator runs on its own fixed period.
    pub sampling_interval_secs: u32,
    /// Free-form description
    pub description: Option<String>,
    /// Owning device identifier
    pub device_id: String,
    /// Provisioning time
    pub created_at: DateTime<Utc>,
}

/// Default sampling cadence in seconds
pub const DEFAULT_SAMPLING_INTERVAL_SECS: u32 = 30;

impl Sensor {
    /// Create a sensor with default status (`active`) and sampling interval
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        sensor_type: SensorType,
        unit: impl Into<String>,
        device_id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            sensor_type,
            unit: unit.into(),
            min_value: None,
            max_value: None,
            status: SensorStatus::default(),
            sampling_interval_secs: DEFAULT_SAMPLING_INTERVAL_SECS,
            description: None,
            device_id: device_id.into(),
            created_at: Utc::now(),
        }
    }

    /// Set declared min/max bounds
    pub fn with_bounds(mut self, min: f64, max: f64) -> Self {
        self.min_value = Some(min);
        self.max_value = Some(max);
        self
    }

    /// Set the sampling interval in seconds
    pub fn with_sampling_interval(mut self, secs: u32) -> Self {
        self.sampling_interval_secs = secs;
        self
    }

    /// Set the operational status
    pub fn with_status(mut self, status: SensorStatus) -> Self {
        self.status = status;
        self
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Whether the sensor is currently producing data
    pub fn is_active(&self) -> bool {
        self.status == SensorStatus::Active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sensor_defaults() {
        let sensor = Sensor::new("s-1", "Temperature", SensorType::Temperature, "°C", "dev-1");
        assert_eq!(sensor.status, SensorStatus::Active);
        assert_eq!(sensor.sampling_interval_secs, 30);
        assert!(sensor.min_value.is_none());
        assert!(sensor.is_active());
    }

    #[test]
    fn test_sensor_builders() {
        let sensor = Sensor::new("s-1", "Humidity", SensorType::Humidity, "%", "dev-1")
            .with_bounds(0.0, 100.0)
            .with_sampling_interval(60)
            .with_status(SensorStatus::Inactive)
            .with_description("greenhouse humidity");

        assert_eq!(sensor.min_value, Some(0.0));
        assert_eq!(sensor.max_value, Some(100.0));
        assert_eq!(sensor.sampling_interval_secs, 60);
        assert!(!sensor.is_active());
        assert_eq!(sensor.description.as_deref(), Some("greenhouse humidity"));
    }

    #[test]
    fn test_sensor_type_wire_names() {
        assert_eq!(SensorType::AirQuality.as_str(), "air_quality");
        assert_eq!(SensorType::WindSpeed.as_str(), "wind_speed");

        let json = serde_json::to_string(&SensorType::AirQuality).unwrap();
        assert_eq!(json, "\"air_quality\"");
    }

    #[test]
    fn test_sensor_serializes_type_field() {
        let sensor = Sensor::new("s-1", "Rain", SensorType::Rainfall, "mm/h", "dev-1");
        let json = serde_json::to_value(&sensor).unwrap();
        assert_eq!(json["type"], "rainfall");
        assert_eq!(json["status"], "active");
    }
}
