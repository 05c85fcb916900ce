// SensorGrid - Station telemetry pipeline
// Copyright (c) 2026 SensorGrid Contributors
//
// Licensed under AGPL-3.0. See LICENSE file for details.

//! Threshold classification over a sensor's latest reading.
//!
//! A single-shot, stateless classifier: every call re-derives the result
//! from the sensor's stored semantic type and the latest value. There is no
//! acknowledgement, deduplication, or suppression.

use serde::Serialize;

use crate::reading::Reading;
use crate::sensor::{Sensor, SensorType};

/// Temperature alert threshold in °C, exclusive
pub const TEMPERATURE_THRESHOLD: f64 = 35.0;
/// Humidity alert threshold in %, exclusive
pub const HUMIDITY_THRESHOLD: f64 = 80.0;
/// Pressure alert threshold in hPa, exclusive
pub const PRESSURE_THRESHOLD: f64 = 1013.0;
/// Threshold for every other sensor type, inclusive
pub const DISTURBANCE_THRESHOLD: f64 = 1.0;

/// An active threshold breach derived from a sensor's latest reading
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Alert {
    /// Sensor that breached
    pub sensor_id: String,
    /// Display name of the sensor
    pub sensor_name: String,
    /// Breaching value
    pub value: f64,
    /// Human-readable alert text
    pub message: String,
}

/// Classify a sensor's latest reading
///
/// An absent reading never alerts. Temperature, humidity and pressure have
/// exclusive thresholds; all remaining types share the inclusive
/// disturbance threshold.
pub fn evaluate(sensor: &Sensor, latest: Option<&Reading>) -> Option<Alert> {
    let value = latest?.value;
    let message = match sensor.sensor_type {
        SensorType::Temperature if value > TEMPERATURE_THRESHOLD => {
            format!("high temperature: {value}°C")
        }
        SensorType::Humidity if value > HUMIDITY_THRESHOLD => {
            format!("high humidity: {value}%")
        }
        SensorType::Pressure if value > PRESSURE_THRESHOLD => {
            format!("high pressure: {value}hPa")
        }
        SensorType::Temperature | SensorType::Humidity | SensorType::Pressure => return None,
        _ if value >= DISTURBANCE_THRESHOLD => {
            format!("disturbance detected: {value}")
        }
        _ => return None,
    };

    Some(Alert {
        sensor_id: sensor.id.clone(),
        sensor_name: sensor.name.clone(),
        value,
        message,
    })
}
