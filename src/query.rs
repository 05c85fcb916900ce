// SensorGrid - Station telemetry pipeline
// Copyright (c) 2026 SensorGrid Contributors
//
// Licensed under AGPL-3.0. See LICENSE file for details.

//! Read-side composition over the reading store.
//!
//! Thin wrappers shaping store primitives for callers (HTTP layer, UI,
//! dashboards). No invariants beyond the store's own; all operations are
//! pure functions of current store state.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::alert::{self, Alert};
use crate::error::Result;
use crate::reading::Reading;
use crate::sensor::Sensor;
use crate::store::SensorStore;

/// Default cap on range-query result size
pub const DEFAULT_QUERY_LIMIT: usize = 100;

/// A sensor together with a slice of its history
#[derive(Debug, Clone, Serialize)]
pub struct SensorHistory {
    pub sensor: Sensor,
    pub readings: Vec<Reading>,
}

/// A sensor together with its most recent reading, if any
#[derive(Debug, Clone, Serialize)]
pub struct LatestReading {
    pub sensor: Sensor,
    pub reading: Option<Reading>,
}

/// Counts shown on the monitoring overview
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Overview {
    pub sensors: usize,
    pub active_sensors: usize,
}

/// Read-side facade over a shared [`SensorStore`]
#[derive(Debug, Clone)]
pub struct QueryService {
    store: Arc<SensorStore>,
}

impl QueryService {
    /// Create a query service over a shared store
    pub fn new(store: Arc<SensorStore>) -> Self {
        Self { store }
    }

    /// A sensor and its full stored history
    pub fn history(&self, id: &str) -> Result<SensorHistory> {
        let sensor = self.store.get(id)?;
        let readings = self.store.readings(id)?;
        Ok(SensorHistory { sensor, readings })
    }

    /// History within `[start, end]`, capped to the most recent `limit`
    /// entries (default 100), ascending order preserved
    pub fn history_range(
        &self,
        id: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        limit: Option<usize>,
    ) -> Result<SensorHistory> {
        let sensor = self.store.get(id)?;
        let mut readings = self.store.range(id, start, end)?;

        let limit = limit.unwrap_or(DEFAULT_QUERY_LIMIT);
        if readings.len() > limit {
            readings.drain(..readings.len() - limit);
        }

        Ok(SensorHistory { sensor, readings })
    }

    /// The most recent `n` readings, for chart rendering
    pub fn recent(&self, id: &str, n: usize) -> Result<SensorHistory> {
        let sensor = self.store.get(id)?;
        let readings = self.store.tail(id, n)?;
        Ok(SensorHistory { sensor, readings })
    }

    /// A sensor and its latest reading, if any
    pub fn latest(&self, id: &str) -> Result<LatestReading> {
        let sensor = self.store.get(id)?;
        let reading = self.store.latest(id)?;
        Ok(LatestReading { sensor, reading })
    }

    /// Alert classification of one sensor's latest reading
    pub fn alert(&self, id: &str) -> Result<Option<Alert>> {
        let sensor = self.store.get(id)?;
        let latest = self.store.latest(id)?;
        Ok(alert::evaluate(&sensor, latest.as_ref()))
    }

    /// Current alerts across all sensors, each evaluated independently
    ///
    /// A sensor deleted concurrently with the sweep is skipped.
    pub fn alerts(&self) -> Vec<Alert> {
        self.store
            .list()
            .iter()
            .filter_map(|sensor| {
                let latest = self.store.latest(&sensor.id).ok()?;
                alert::evaluate(sensor, latest.as_ref())
            })
            .collect()
    }

    /// Sensor counts for the overview header
    pub fn overview(&self) -> Overview {
        let sensors = self.store.list();
        Overview {
            sensors: sensors.len(),
            active_sensors: sensors.iter().filter(|s| s.is_active()).count(),
        }
    }
}
