// SensorGrid Simulator - Synthetic telemetry generator
// Copyright (c) 2026 SensorGrid Contributors
//
// Licensed under AGPL-3.0. See LICENSE file for details.

//! # SensorGrid Simulator
//!
//! Synthetic telemetry for the SensorGrid pipeline: in the absence of a real
//! telemetry source, produce plausible values on a fixed cadence for every
//! active sensor so the rest of the system has data to display.
//!
//! - [`synth`]: per-type value synthesis (diurnal curves, commute-hour load,
//!   bounded jitter)
//! - [`simulator`]: the tick scheduler with an explicit start/stop lifecycle
//! - [`presets`]: ready-made station fleets for demos and tests
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use sensorgrid::{DeviceDirectory, MemoryDeviceDirectory, SensorStore};
//! use sensorgrid_gateway::{IngestionGateway, MemoryBus, MessageBus};
//! use sensorgrid_simulator::{presets, Simulator, SimulatorConfig};
//!
//! let store = Arc::new(SensorStore::new());
//! let devices = Arc::new(MemoryDeviceDirectory::new());
//!
//! let (device, sensors) = presets::weather_station("dev-1", "North mast", "st-1");
//! devices.register(device);
//! for sensor in sensors {
//!     store.register(sensor).unwrap();
//! }
//!
//! let gateway = Arc::new(IngestionGateway::new(
//!     Arc::clone(&store),
//!     devices as Arc<dyn DeviceDirectory>,
//! ));
//! let bus = Arc::new(MemoryBus::new());
//! let simulator = Simulator::with_config(
//!     gateway,
//!     bus as Arc<dyn MessageBus>,
//!     SimulatorConfig::new().with_seed(42),
//! );
//!
//! // One tick produces one reading per active sensor
//! assert_eq!(simulator.tick(), 8);
//! assert_eq!(store.reading_count("dev-1-temperature").unwrap(), 1);
//! ```

pub mod presets;
pub mod simulator;
pub mod synth;

// Re-exports for convenience
pub use simulator::{Simulator, SimulatorConfig, SimulatorState};
pub use synth::synthetic_value;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
