// SensorGrid - Station telemetry pipeline
// Copyright (c) 2026 SensorGrid Contributors
//
// Licensed under AGPL-3.0. See LICENSE file for details.

//! # SensorGrid
//!
//! In-memory telemetry pipeline for measurement-station sensor networks:
//! stations contain devices, devices contain sensors, sensors accumulate
//! time-stamped readings.
//!
//! This core crate holds the foundational pieces:
//!
//! - [`store`]: per-sensor bounded reading storage with FIFO eviction
//! - [`query`]: read-side composition for callers (range, latest, alerts)
//! - [`alert`]: stateless threshold classification of the latest reading
//! - [`sensor`] / [`device`] / [`reading`]: domain types and the
//!   device-lookup seam
//!
//! Ingestion (message bus and gateway) lives in `sensorgrid-gateway`; the
//! synthetic generator lives in `sensorgrid-simulator`.
//!
//! ## Quick Start
//!
//! ```rust
//! use sensorgrid::{Quality, Sensor, SensorStore, SensorType};
//!
//! let store = SensorStore::new();
//! store
//!     .register(Sensor::new(
//!         "s-temp",
//!         "Temperature",
//!         SensorType::Temperature,
//!         "°C",
//!         "dev-1",
//!     ))
//!     .unwrap();
//!
//! let reading = store.append("s-temp", 22.5, Quality::Good).unwrap();
//! assert_eq!(reading.value, 22.5);
//! assert_eq!(store.latest("s-temp").unwrap().unwrap().value, 22.5);
//! ```
//!
//! ## Architecture
//!
//! ```text
//! bus message ──┐
//!               ├─► IngestionGateway ─► SensorStore (per-sensor records)
//! generator ────┘                            │
//!                                            ▼
//!                      caller ─► QueryService ─► alert::evaluate(latest)
//! ```
//!
//! Each sensor record carries its own lock: appends to the same sensor
//! serialize, appends to different sensors run in parallel, and queries may
//! run concurrently with appends.

pub mod alert;
pub mod device;
pub mod error;
pub mod query;
pub mod reading;
pub mod sensor;
pub mod store;

// Re-exports for convenient access
pub use alert::{evaluate, Alert};
pub use device::{Device, DeviceDirectory, DeviceStatus, MemoryDeviceDirectory};
pub use error::{Error, Result};
pub use query::{LatestReading, Overview, QueryService, SensorHistory, DEFAULT_QUERY_LIMIT};
pub use reading::{Quality, Reading};
pub use sensor::{Sensor, SensorStatus, SensorType, DEFAULT_SAMPLING_INTERVAL_SECS};
pub use store::{SensorId, SensorStore, MAX_READINGS};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_basic_pipeline() {
        let store = SensorStore::new();
        store
            .register(Sensor::new(
                "s-1",
                "Temperature",
                SensorType::Temperature,
                "°C",
                "dev-1",
            ))
            .unwrap();

        store.append("s-1", 36.2, Quality::Good).unwrap();

        let sensor = store.get("s-1").unwrap();
        let latest = store.latest("s-1").unwrap();
        let alert = evaluate(&sensor, latest.as_ref()).unwrap();
        assert_eq!(alert.message, "high temperature: 36.2°C");
    }
}
