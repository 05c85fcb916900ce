// SensorGrid Simulator - Synthetic telemetry generator
// Copyright (c) 2026 SensorGrid Contributors
//
// Licensed under AGPL-3.0. See LICENSE file for details.

//! Synthetic measurement values per sensor type.
//!
//! Each value is a deterministic function of the sensor type and the hour of
//! day, plus bounded uniform jitter: a diurnal sinusoid for temperature with
//! its trough in the early morning, the inverse curve for humidity,
//! commute-hour load for noise and air quality, daylight gating for light.

use std::f64::consts::PI;

use rand::Rng;

use sensorgrid::SensorType;

/// Morning and evening commute windows, inclusive
fn is_commute_hour(hour: u32) -> bool {
    (7..=9).contains(&hour) || (17..=19).contains(&hour)
}

/// Round to one decimal place
fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Synthesize a plausible value for a sensor type at the given hour of day
///
/// `hour` is the local hour in `0..24`.
pub fn synthetic_value(sensor_type: SensorType, hour: u32, rng: &mut impl Rng) -> f64 {
    let hour_f = hour as f64;
    match sensor_type {
        SensorType::Temperature => {
            let variation = ((hour_f - 6.0) * PI / 12.0).sin() * 8.0;
            round1(25.0 + variation + (rng.gen::<f64>() - 0.5) * 2.0)
        }
        SensorType::Humidity => {
            // Inverse of the temperature curve, clamped to a plausible band
            let variation = ((hour_f - 6.0) * PI / 12.0).sin() * 20.0;
            (60.0 - variation + (rng.gen::<f64>() - 0.5) * 10.0)
                .clamp(30.0, 95.0)
                .round()
        }
        SensorType::Pressure => round1(1013.0 + (rng.gen::<f64>() - 0.5) * 10.0),
        SensorType::Light => {
            if (6..=18).contains(&hour) {
                (800.0 + rng.gen::<f64>() * 400.0).round()
            } else {
                (rng.gen::<f64>() * 50.0).round()
            }
        }
        SensorType::Noise => {
            let spread = if is_commute_hour(hour) { 30.0 } else { 10.0 };
            (40.0 + rng.gen::<f64>() * spread).round()
        }
        SensorType::AirQuality => {
            let spread = if is_commute_hour(hour) { 40.0 } else { 20.0 };
            (50.0 + rng.gen::<f64>() * spread).round()
        }
        SensorType::WindSpeed => round1(rng.gen::<f64>() * 20.0),
        SensorType::Rainfall => {
            if rng.gen::<f64>() < 0.1 {
                round1(rng.gen::<f64>() * 5.0)
            } else {
                0.0
            }
        }
    }
}
