// SensorGrid - Station telemetry pipeline
// Copyright (c) 2026 SensorGrid Contributors
//
// Licensed under AGPL-3.0. See LICENSE file for details.

//! Bounded per-sensor reading storage.
//!
//! The [`SensorStore`] is a registry mapping sensor ids to independently
//! lockable records. Appends to the same sensor serialize on that sensor's
//! lock; appends to different sensors never contend. Readers share the same
//! per-record lock briefly and may trail an in-flight append by at most one
//! reading.

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex, RwLock};

use chrono::{DateTime, Utc};

use crate::error::{Error, Result};
use crate::reading::{Quality, Reading};
use crate::sensor::{Sensor, SensorStatus};

/// Unique identifier for a sensor
pub type SensorId = String;

/// Maximum readings retained per sensor; the oldest are evicted first
pub const MAX_READINGS: usize = 1000;

/// One sensor's state: metadata plus its bounded reading history
#[derive(Debug)]
struct SensorRecord {
    info: RwLock<Sensor>,
    readings: Mutex<VecDeque<Reading>>,
}

impl SensorRecord {
    fn new(info: Sensor) -> Self {
        Self {
            info: RwLock::new(info),
            readings: Mutex::new(VecDeque::new()),
        }
    }
}

/// Registry of sensors with per-sensor bounded reading history
#[derive(Debug, Default)]
pub struct SensorStore {
    sensors: RwLock<HashMap<SensorId, Arc<SensorRecord>>>,
}

impl SensorStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    fn record(&self, id: &str) -> Result<Arc<SensorRecord>> {
        self.sensors
            .read()
            .unwrap()
            .get(id)
            .cloned()
            .ok_or_else(|| Error::SensorNotFound(id.to_string()))
    }

    /// Provision a sensor
    ///
    /// # Errors
    ///
    /// Returns an error if the id is already registered or the sampling
    /// interval is zero.
    pub fn register(&self, sensor: Sensor) -> Result<()> {
        if sensor.sampling_interval_secs == 0 {
            return Err(Error::InvalidSensor {
                id: sensor.id.clone(),
                reason: "sampling interval must be at least 1 second".to_string(),
            });
        }

        let mut sensors = self.sensors.write().unwrap();
        if sensors.contains_key(&sensor.id) {
            return Err(Error::SensorAlreadyExists(sensor.id));
        }
        sensors.insert(sensor.id.clone(), Arc::new(SensorRecord::new(sensor)));
        Ok(())
    }

    /// Delete a sensor, discarding all of its readings
    pub fn remove(&self, id: &str) -> Result<Sensor> {
        let record = self
            .sensors
            .write()
            .unwrap()
            .remove(id)
            .ok_or_else(|| Error::SensorNotFound(id.to_string()))?;
        let info = record.info.read().unwrap().clone();
        Ok(info)
    }

    /// Whether a sensor id is registered
    pub fn contains(&self, id: &str) -> bool {
        self.sensors.read().unwrap().contains_key(id)
    }

    /// Number of registered sensors
    pub fn count(&self) -> usize {
        self.sensors.read().unwrap().len()
    }

    /// Metadata snapshot of every registered sensor
    pub fn list(&self) -> Vec<Sensor> {
        let sensors = self.sensors.read().unwrap();
        sensors
            .values()
            .map(|record| record.info.read().unwrap().clone())
            .collect()
    }

    /// Metadata snapshot of one sensor
    pub fn get(&self, id: &str) -> Result<Sensor> {
        let record = self.record(id)?;
        let info = record.info.read().unwrap().clone();
        Ok(info)
    }

    /// Update a sensor's operational status
    pub fn set_status(&self, id: &str, status: SensorStatus) -> Result<()> {
        let record = self.record(id)?;
        record.info.write().unwrap().status = status;
        Ok(())
    }

    /// Update a sensor's metadata in place; the id cannot change
    pub fn update<F>(&self, id: &str, f: F) -> Result<Sensor>
    where
        F: FnOnce(&mut Sensor),
    {
        let record = self.record(id)?;
        let mut info = record.info.write().unwrap();
        let original_id = info.id.clone();
        f(&mut info);
        info.id = original_id;
        Ok(info.clone())
    }

    /// Append a reading stamped with the current time
    ///
    /// When the history exceeds [`MAX_READINGS`] the oldest readings are
    /// evicted silently; that is expected steady-state behavior, not a
    /// failure.
    pub fn append(&self, id: &str, value: f64, quality: Quality) -> Result<Reading> {
        self.append_at(id, value, Utc::now(), quality)
    }

    /// Append a reading with a source-supplied timestamp
    ///
    /// Insertion order must coincide with non-decreasing timestamp order for
    /// range queries to behave; out-of-order timestamps are the caller's
    /// violation.
    pub fn append_at(
        &self,
        id: &str,
        value: f64,
        timestamp: DateTime<Utc>,
        quality: Quality,
    ) -> Result<Reading> {
        let record = self.record(id)?;
        let reading = Reading::at(value, timestamp, quality);

        let mut readings = record.readings.lock().unwrap();
        readings.push_back(reading.clone());
        while readings.len() > MAX_READINGS {
            readings.pop_front();
        }

        Ok(reading)
    }

    /// Every reading with `start <= timestamp <= end`, ascending by timestamp
    ///
    /// Produces an empty vector (not an error) when nothing matches.
    pub fn range(
        &self,
        id: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<Reading>> {
        let record = self.record(id)?;
        let readings = record.readings.lock().unwrap();
        let mut matched: Vec<Reading> = readings
            .iter()
            .filter(|r| r.timestamp >= start && r.timestamp <= end)
            .cloned()
            .collect();
        matched.sort_by_key(|r| r.timestamp);
        Ok(matched)
    }

    /// The most recently appended reading, or `None` when there is no data yet
    pub fn latest(&self, id: &str) -> Result<Option<Reading>> {
        let record = self.record(id)?;
        let readings = record.readings.lock().unwrap();
        Ok(readings.back().cloned())
    }

    /// The most recent `n` readings (or fewer), in original order
    pub fn tail(&self, id: &str, n: usize) -> Result<Vec<Reading>> {
        let record = self.record(id)?;
        let readings = record.readings.lock().unwrap();
        let skip = readings.len().saturating_sub(n);
        Ok(readings.iter().skip(skip).cloned().collect())
    }

    /// Full history snapshot, in insertion order
    pub fn readings(&self, id: &str) -> Result<Vec<Reading>> {
        let record = self.record(id)?;
        let readings = record.readings.lock().unwrap();
        Ok(readings.iter().cloned().collect())
    }

    /// Number of stored readings for a sensor
    pub fn reading_count(&self, id: &str) -> Result<usize> {
        let record = self.record(id)?;
        let count = record.readings.lock().unwrap().len();
        Ok(count)
    }
}
