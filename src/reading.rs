// SensorGrid - Station telemetry pipeline
// Copyright (c) 2026 SensorGrid Contributors
//
// Licensed under AGPL-3.0. See LICENSE file for details.

//! Reading types: one timestamped, quality-tagged sample.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Quality tag carried by every reading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Quality {
    /// Sample is trusted
    #[default]
    Good,
    /// Sample may be degraded (sensor warming up, marginal signal)
    Uncertain,
    /// Sample is known bad but was recorded anyway
    Bad,
}

impl Quality {
    /// String form used on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            Quality::Good => "good",
            Quality::Uncertain => "uncertain",
            Quality::Bad => "bad",
        }
    }
}

/// One measurement sample. Immutable once appended to a sensor's history.
///
/// Serialized shape: `{ "value": f64, "timestamp": ISO-8601, "quality": "good" }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    /// Measured value
    pub value: f64,
    /// Point in time the sample refers to; append-time when the source
    /// supplied none
    pub timestamp: DateTime<Utc>,
    /// Quality tag, `good` unless the source said otherwise
    #[serde(default)]
    pub quality: Quality,
}

impl Reading {
    /// Create a reading stamped with the current time
    pub fn new(value: f64, quality: Quality) -> Self {
        Self {
            value,
            timestamp: Utc::now(),
            quality,
        }
    }

    /// Create a reading with an explicit timestamp
    pub fn at(value: f64, timestamp: DateTime<Utc>, quality: Quality) -> Self {
        Self {
            value,
            timestamp,
            quality,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_quality_default() {
        assert_eq!(Quality::default(), Quality::Good);
    }

    #[test]
    fn test_quality_as_str() {
        assert_eq!(Quality::Good.as_str(), "good");
        assert_eq!(Quality::Uncertain.as_str(), "uncertain");
        assert_eq!(Quality::Bad.as_str(), "bad");
    }

    #[test]
    fn test_reading_serializes_iso8601() {
        let ts = Utc.with_ymd_and_hms(2026, 3, 1, 12, 30, 0).unwrap();
        let reading = Reading::at(22.5, ts, Quality::Good);
        let json = serde_json::to_value(&reading).unwrap();

        assert_eq!(json["value"], 22.5);
        assert_eq!(json["quality"], "good");
        let text = json["timestamp"].as_str().unwrap();
        assert!(text.starts_with("2026-03-01T12:30:00"));
    }

    #[test]
    fn test_reading_deserialize_defaults_quality() {
        let json = r#"{"value": 1.0, "timestamp": "2026-03-01T12:30:00Z"}"#;
        let reading: Reading = serde_json::from_str(json).unwrap();
        assert_eq!(reading.quality, Quality::Good);
    }
}
