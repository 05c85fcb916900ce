// SensorGrid Gateway - Ingestion entry point
// Copyright (c) 2026 SensorGrid Contributors
//
// Licensed under AGPL-3.0. See LICENSE file for details.

//! The ingestion gateway: single entry point for new measurements.
//!
//! Every reading enters a sensor's history through [`IngestionGateway::ingest`],
//! whether it originated on the bus or in the synthetic generator.
//! [`IngestionGateway::handle_message`] is the consuming half of the
//! loopback pattern: it parses bus traffic and funnels sensor data into
//! `ingest`, while device-status messages trigger a best-effort liveness
//! update that never affects the data path.

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, warn};

use sensorgrid::{DeviceDirectory, Quality, Reading, SensorStore};

use crate::bus::{BusError, MessageBus};
use crate::error::{GatewayError, Result};
use crate::payload::{DataPayload, StatusPayload};
use crate::topic::{Topic, DEVICE_STATUS_PATTERN, SENSOR_DATA_PATTERN};

/// Single entry point through which measurements reach the reading store
pub struct IngestionGateway {
    store: Arc<SensorStore>,
    devices: Arc<dyn DeviceDirectory>,
}

impl IngestionGateway {
    /// Create a gateway over a shared store and device directory
    pub fn new(store: Arc<SensorStore>, devices: Arc<dyn DeviceDirectory>) -> Self {
        Self { store, devices }
    }

    /// The underlying reading store
    pub fn store(&self) -> &Arc<SensorStore> {
        &self.store
    }

    /// Validate and append one measurement, stamped with the current time
    ///
    /// # Errors
    ///
    /// `InvalidPayload` for a non-finite value; `Store` with
    /// `SensorNotFound` when the id does not resolve.
    pub fn ingest(&self, sensor_id: &str, value: f64, quality: Quality) -> Result<Reading> {
        self.ingest_payload(sensor_id, &DataPayload::new(value).with_quality(quality))
    }

    /// Append a parsed payload, honoring a source-supplied timestamp
    pub fn ingest_payload(&self, sensor_id: &str, payload: &DataPayload) -> Result<Reading> {
        if !payload.value.is_finite() {
            return Err(GatewayError::InvalidPayload(
                "value is not a finite number".to_string(),
            ));
        }

        let quality = payload.quality.unwrap_or_default();
        let reading = match payload.timestamp {
            Some(timestamp) => self
                .store
                .append_at(sensor_id, payload.value, timestamp, quality)?,
            None => self.store.append(sensor_id, payload.value, quality)?,
        };

        debug!("Ingested {} = {}", sensor_id, reading.value);
        Ok(reading)
    }

    /// Bus-facing message handler, the `onMessage()` half of the loopback
    ///
    /// Sensor-data failures surface to the caller; device-status updates are
    /// best-effort and never fail the data path.
    pub fn handle_message(&self, topic: &str, payload: &[u8]) -> Result<()> {
        match Topic::parse(topic) {
            Some(Topic::SensorData { sensor_id }) => {
                let payload = DataPayload::from_json(payload)?;
                self.ingest_payload(&sensor_id, &payload)?;
                Ok(())
            }
            Some(Topic::DeviceStatus { device_id }) => {
                self.handle_device_status(&device_id, payload);
                Ok(())
            }
            None => Err(GatewayError::InvalidPayload(format!(
                "unrecognized topic: {topic}"
            ))),
        }
    }

    fn handle_device_status(&self, device_id: &str, payload: &[u8]) {
        let payload = match StatusPayload::from_json(payload) {
            Ok(payload) => payload,
            Err(e) => {
                warn!("Malformed status for device {}: {}", device_id, e);
                return;
            }
        };

        match self.devices.mark_seen(device_id, payload.status, Utc::now()) {
            Ok(()) => debug!("Device {} reported {:?}", device_id, payload.status),
            Err(e) => warn!("Failed to update device {}: {}", device_id, e),
        }
    }

    /// Subscribe a shared gateway's handlers on a bus
    ///
    /// Dropped messages are logged; a bad sample never stalls the channel.
    pub fn bind(gateway: &Arc<Self>, bus: &dyn MessageBus) -> std::result::Result<(), BusError> {
        for pattern in [SENSOR_DATA_PATTERN, DEVICE_STATUS_PATTERN] {
            let gateway = Arc::clone(gateway);
            bus.subscribe(
                pattern,
                Box::new(move |topic, payload| {
                    if let Err(e) = gateway.handle_message(topic, payload) {
                        warn!("Dropped message on {}: {}", topic, e);
                    }
                }),
            )?;
        }
        Ok(())
    }
}
