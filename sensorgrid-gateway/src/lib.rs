// SensorGrid Gateway - Ingestion entry point
// Copyright (c) 2026 SensorGrid Contributors
//
// Licensed under AGPL-3.0. See LICENSE file for details.

//! # SensorGrid Gateway
//!
//! Ingestion layer for the SensorGrid pipeline: the single entry point
//! through which any new measurement reaches a sensor's history, plus the
//! message-bus seam that carries telemetry in and out of the process.
//!
//! ## Overview
//!
//! Two independent activity sources feed the gateway: inbound bus messages
//! (push, arbitrary arrival times) and the synthetic generator's periodic
//! tick. Both call [`IngestionGateway::ingest`], which validates the sample
//! and appends it to the shared [`SensorStore`](sensorgrid::SensorStore).
//!
//! Ingestion favors availability over completeness: malformed payloads are
//! dropped and logged, never retried; a publish failure never rolls back a
//! committed reading; a device-status side update is best-effort.
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use sensorgrid::{MemoryDeviceDirectory, Quality, Sensor, SensorStore, SensorType};
//! use sensorgrid_gateway::{IngestionGateway, MemoryBus};
//!
//! let store = Arc::new(SensorStore::new());
//! store
//!     .register(Sensor::new("s-1", "Temperature", SensorType::Temperature, "°C", "dev-1"))
//!     .unwrap();
//!
//! let devices = Arc::new(MemoryDeviceDirectory::new());
//! let gateway = Arc::new(IngestionGateway::new(Arc::clone(&store), devices));
//!
//! // Direct ingestion (the generator path)
//! gateway.ingest("s-1", 22.5, Quality::Good).unwrap();
//!
//! // Bus-driven ingestion (the broker path)
//! let bus = MemoryBus::new();
//! IngestionGateway::bind(&gateway, &bus).unwrap();
//! bus.inject("sensors/s-1/data", b"{\"value\": 23.1}");
//!
//! assert_eq!(store.reading_count("s-1").unwrap(), 2);
//! ```

mod bus;
mod error;
mod gateway;
mod payload;
mod topic;

// Public API
pub use bus::{BusError, BusMetrics, MemoryBus, MessageBus, MessageHandler};
pub use error::{GatewayError, Result};
pub use gateway::IngestionGateway;
pub use payload::{DataPayload, StatusPayload};
pub use topic::{topic_matches, Topic, DEVICE_STATUS_PATTERN, SENSOR_DATA_PATTERN};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
