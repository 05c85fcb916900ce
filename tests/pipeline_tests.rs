// SensorGrid - Station telemetry pipeline
// Copyright (c) 2026 SensorGrid Contributors
//
// Licensed under AGPL-3.0. See LICENSE file for details.

//! Integration tests for the reading store and query surface.
//!
//! These exercise the bounded-retention invariant, range-query ordering,
//! and the per-sensor exclusion guarantees under concurrent appends.

use std::sync::Arc;
use std::thread;

use chrono::{Duration, TimeZone, Utc};
use sensorgrid::{
    evaluate, Quality, QueryService, Sensor, SensorStore, SensorType, MAX_READINGS,
};

fn weather_sensor(id: &str, sensor_type: SensorType) -> Sensor {
    Sensor::new(id, "Probe", sensor_type, "u", "dev-1")
}

#[test]
fn retention_holds_after_every_append() {
    let store = SensorStore::new();
    store
        .register(weather_sensor("s-1", SensorType::Temperature))
        .unwrap();

    for i in 0..(MAX_READINGS * 2) {
        store.append("s-1", i as f64, Quality::Good).unwrap();
        assert!(store.reading_count("s-1").unwrap() <= MAX_READINGS);
    }

    let readings = store.readings("s-1").unwrap();
    assert_eq!(readings.len(), MAX_READINGS);
    assert_eq!(readings.first().unwrap().value, MAX_READINGS as f64);
    assert_eq!(
        readings.last().unwrap().value,
        (MAX_READINGS * 2 - 1) as f64
    );
}

#[test]
fn range_query_is_inclusive_and_sorted() {
    let store = SensorStore::new();
    store
        .register(weather_sensor("s-1", SensorType::Pressure))
        .unwrap();

    let base = Utc.with_ymd_and_hms(2026, 4, 1, 6, 0, 0).unwrap();
    for i in 0..20 {
        store
            .append_at(
                "s-1",
                1000.0 + i as f64,
                base + Duration::minutes(i),
                Quality::Good,
            )
            .unwrap();
    }

    let start = base + Duration::minutes(5);
    let end = base + Duration::minutes(10);
    let matched = store.range("s-1", start, end).unwrap();

    assert_eq!(matched.len(), 6);
    assert_eq!(matched.first().unwrap().timestamp, start);
    assert_eq!(matched.last().unwrap().timestamp, end);
    assert!(matched.windows(2).all(|w| w[0].timestamp <= w[1].timestamp));
}

#[test]
fn latest_transitions_from_absent_to_value() {
    let store = SensorStore::new();
    store
        .register(weather_sensor("s-1", SensorType::Humidity))
        .unwrap();

    assert!(store.latest("s-1").unwrap().is_none());

    store.append("s-1", 55.0, Quality::Good).unwrap();
    assert_eq!(store.latest("s-1").unwrap().unwrap().value, 55.0);
}

#[test]
fn concurrent_appends_to_one_sensor_lose_nothing() {
    let store = Arc::new(SensorStore::new());
    store
        .register(weather_sensor("s-1", SensorType::Noise))
        .unwrap();

    const THREADS: usize = 8;
    const PER_THREAD: usize = 50;

    let mut handles = Vec::new();
    for t in 0..THREADS {
        let store = Arc::clone(&store);
        handles.push(thread::spawn(move || {
            for i in 0..PER_THREAD {
                let value = (t * PER_THREAD + i) as f64;
                store.append("s-1", value, Quality::Good).unwrap();
            }
        }));
    }
    for handle in handles {
        handle.join().unwrap();
    }

    let readings = store.readings("s-1").unwrap();
    assert_eq!(readings.len(), THREADS * PER_THREAD);

    // Every distinct value made it in exactly once
    let mut values: Vec<u64> = readings.iter().map(|r| r.value as u64).collect();
    values.sort_unstable();
    let expected: Vec<u64> = (0..(THREADS * PER_THREAD) as u64).collect();
    assert_eq!(values, expected);
}

#[test]
fn concurrent_appends_to_distinct_sensors_are_independent() {
    let store = Arc::new(SensorStore::new());
    for i in 0..4 {
        store
            .register(weather_sensor(&format!("s-{i}"), SensorType::Light))
            .unwrap();
    }

    let mut handles = Vec::new();
    for i in 0..4 {
        let store = Arc::clone(&store);
        handles.push(thread::spawn(move || {
            let id = format!("s-{i}");
            for j in 0..200 {
                store.append(&id, j as f64, Quality::Good).unwrap();
            }
        }));
    }
    for handle in handles {
        handle.join().unwrap();
    }

    for i in 0..4 {
        assert_eq!(store.reading_count(&format!("s-{i}")).unwrap(), 200);
    }
}

#[test]
fn readers_run_alongside_writers() {
    let store = Arc::new(SensorStore::new());
    store
        .register(weather_sensor("s-1", SensorType::WindSpeed))
        .unwrap();

    let writer = {
        let store = Arc::clone(&store);
        thread::spawn(move || {
            for i in 0..500 {
                store.append("s-1", i as f64, Quality::Good).unwrap();
            }
        })
    };

    let reader = {
        let store = Arc::clone(&store);
        thread::spawn(move || {
            let mut last_len = 0;
            for _ in 0..500 {
                let len = store.reading_count("s-1").unwrap();
                // History only grows while under the cap
                assert!(len >= last_len);
                last_len = len;
                if let Some(latest) = store.latest("s-1").unwrap() {
                    assert!(latest.value >= 0.0);
                }
            }
        })
    };

    writer.join().unwrap();
    reader.join().unwrap();
}

#[test]
fn query_and_alert_compose_over_store() {
    let store = Arc::new(SensorStore::new());
    store
        .register(Sensor::new(
            "s-temp",
            "Temperature",
            SensorType::Temperature,
            "°C",
            "dev-1",
        ))
        .unwrap();
    let service = QueryService::new(Arc::clone(&store));

    store.append("s-temp", 34.0, Quality::Good).unwrap();
    assert!(service.alert("s-temp").unwrap().is_none());

    store.append("s-temp", 37.5, Quality::Good).unwrap();
    let alert = service.alert("s-temp").unwrap().unwrap();
    assert_eq!(alert.message, "high temperature: 37.5°C");

    // The evaluator is stateless: the same state re-derives the same result
    let sensor = store.get("s-temp").unwrap();
    let latest = store.latest("s-temp").unwrap();
    let again = evaluate(&sensor, latest.as_ref()).unwrap();
    assert_eq!(alert, again);
}
