// SensorGrid - Station telemetry pipeline
// Copyright (c) 2026 SensorGrid Contributors
//
// Licensed under AGPL-3.0. See LICENSE file for details.

//! Device metadata and the device-lookup seam.
//!
//! Devices anchor sensors to a station. The pipeline never walks
//! cross-device relationships; it only resolves a device id for display and
//! for the best-effort liveness update performed on device-status messages.

use std::collections::HashMap;
use std::sync::RwLock;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Operational status of a device
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceStatus {
    /// Reporting normally
    Online,
    /// Not heard from
    #[default]
    Offline,
    /// Faulted
    Error,
}

/// Metadata for one field device hosting sensors
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Device {
    /// Opaque unique identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Free-form device type, e.g. `Weather Station`
    #[serde(rename = "type")]
    pub device_type: String,
    /// Hardware model
    pub model: Option<String>,
    /// Serial number
    pub serial_number: Option<String>,
    /// Operational status
    pub status: DeviceStatus,
    /// Last liveness report
    pub last_seen: DateTime<Utc>,
    /// Owning station identifier
    pub station_id: String,
}

impl Device {
    /// Create a device with default status (`offline`)
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        device_type: impl Into<String>,
        station_id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            device_type: device_type.into(),
            model: None,
            serial_number: None,
            status: DeviceStatus::default(),
            last_seen: Utc::now(),
            station_id: station_id.into(),
        }
    }

    /// Set the hardware model
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Set the serial number
    pub fn with_serial_number(mut self, serial: impl Into<String>) -> Self {
        self.serial_number = Some(serial.into());
        self
    }

    /// Set the operational status
    pub fn with_status(mut self, status: DeviceStatus) -> Self {
        self.status = status;
        self
    }
}

/// Lookup seam for the station/device metadata store.
///
/// The pipeline consumes this as a collaborator: resolving an id for display
/// and recording liveness reports. Implementations must be safe to share
/// across the ingestion and generator activity sources.
pub trait DeviceDirectory: Send + Sync {
    /// Resolve a device by id
    fn get(&self, id: &str) -> Result<Device>;

    /// Record a liveness report: status plus last-seen refresh
    fn mark_seen(&self, id: &str, status: DeviceStatus, seen_at: DateTime<Utc>) -> Result<()>;
}

/// In-memory device directory backing tests and the demo agent
#[derive(Debug, Default)]
pub struct MemoryDeviceDirectory {
    devices: RwLock<HashMap<String, Device>>,
}

impl MemoryDeviceDirectory {
    /// Create an empty directory
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a device
    pub fn register(&self, device: Device) {
        self.devices
            .write()
            .unwrap()
            .insert(device.id.clone(), device);
    }

    /// Remove a device
    pub fn remove(&self, id: &str) -> Result<Device> {
        self.devices
            .write()
            .unwrap()
            .remove(id)
            .ok_or_else(|| Error::DeviceNotFound(id.to_string()))
    }

    /// Number of known devices
    pub fn count(&self) -> usize {
        self.devices.read().unwrap().len()
    }

    /// Whether a device id is known
    pub fn contains(&self, id: &str) -> bool {
        self.devices.read().unwrap().contains_key(id)
    }
}

impl DeviceDirectory for MemoryDeviceDirectory {
    fn get(&self, id: &str) -> Result<Device> {
        self.devices
            .read()
            .unwrap()
            .get(id)
            .cloned()
            .ok_or_else(|| Error::DeviceNotFound(id.to_string()))
    }

    fn mark_seen(&self, id: &str, status: DeviceStatus, seen_at: DateTime<Utc>) -> Result<()> {
        let mut devices = self.devices.write().unwrap();
        let device = devices
            .get_mut(id)
            .ok_or_else(|| Error::DeviceNotFound(id.to_string()))?;
        device.status = status;
        device.last_seen = seen_at;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_device() -> Device {
        Device::new("dev-1", "North mast", "Weather Station", "st-1")
            .with_model("WS-1000")
            .with_serial_number("SN0001")
    }

    #[test]
    fn test_device_defaults() {
        let device = make_device();
        assert_eq!(device.status, DeviceStatus::Offline);
        assert_eq!(device.model.as_deref(), Some("WS-1000"));
    }

    #[test]
    fn test_directory_register_and_get() {
        let directory = MemoryDeviceDirectory::new();
        directory.register(make_device());

        assert_eq!(directory.count(), 1);
        let device = directory.get("dev-1").unwrap();
        assert_eq!(device.name, "North mast");
    }

    #[test]
    fn test_directory_get_not_found() {
        let directory = MemoryDeviceDirectory::new();
        let result = directory.get("nonexistent");
        assert!(matches!(result, Err(Error::DeviceNotFound(_))));
    }

    #[test]
    fn test_directory_mark_seen() {
        let directory = MemoryDeviceDirectory::new();
        directory.register(make_device());

        let seen_at = Utc::now();
        directory
            .mark_seen("dev-1", DeviceStatus::Online, seen_at)
            .unwrap();

        let device = directory.get("dev-1").unwrap();
        assert_eq!(device.status, DeviceStatus::Online);
        assert_eq!(device.last_seen, seen_at);
    }

    #[test]
    fn test_directory_mark_seen_unknown() {
        let directory = MemoryDeviceDirectory::new();
        let result = directory.mark_seen("ghost", DeviceStatus::Online, Utc::now());
        assert!(matches!(result, Err(Error::DeviceNotFound(_))));
    }
}
