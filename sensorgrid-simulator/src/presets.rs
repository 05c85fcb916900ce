// SensorGrid Simulator - Synthetic telemetry generator
// Copyright (c) 2026 SensorGrid Contributors
//
// Licensed under AGPL-3.0. See LICENSE file for details.

//! Preset station fleets for demos and tests.
//!
//! Units and declared bounds follow the reference weather-station hardware
//! (WS-1000 masts).

use sensorgrid::{Device, DeviceStatus, Sensor, SensorType};

/// Build one sensor for a station device
fn station_sensor(
    device_id: &str,
    sensor_type: SensorType,
    name: &str,
    unit: &str,
    min: f64,
    max: f64,
) -> Sensor {
    Sensor::new(
        format!("{device_id}-{sensor_type}"),
        name,
        sensor_type,
        unit,
        device_id,
    )
    .with_bounds(min, max)
}

/// A weather-station device with its full eight-sensor complement
pub fn weather_station(
    device_id: &str,
    name: &str,
    station_id: &str,
) -> (Device, Vec<Sensor>) {
    let device = Device::new(device_id, name, "Weather Station", station_id)
        .with_model("WS-1000")
        .with_status(DeviceStatus::Online);

    let sensors = vec![
        station_sensor(device_id, SensorType::Temperature, "Temperature", "°C", -10.0, 50.0),
        station_sensor(device_id, SensorType::Humidity, "Humidity", "%", 0.0, 100.0),
        station_sensor(device_id, SensorType::Pressure, "Pressure", "hPa", 900.0, 1100.0),
        station_sensor(device_id, SensorType::Light, "Light level", "lux", 0.0, 1000.0),
        station_sensor(device_id, SensorType::Noise, "Noise level", "dB", 30.0, 100.0),
        station_sensor(device_id, SensorType::AirQuality, "Air quality", "AQI", 0.0, 500.0),
        station_sensor(device_id, SensorType::WindSpeed, "Wind speed", "m/s", 0.0, 30.0),
        station_sensor(device_id, SensorType::Rainfall, "Rainfall", "mm/h", 0.0, 100.0),
    ];

    (device, sensors)
}
