// SensorGrid Simulator - Synthetic telemetry generator
// Copyright (c) 2026 SensorGrid Contributors
//
// Licensed under AGPL-3.0. See LICENSE file for details.

//! Periodic synthetic-data production.
//!
//! The [`Simulator`] is the producing half of the loopback pattern: each
//! tick synthesizes one value per active sensor, ingests it through the
//! gateway, and publishes the same value outward on the bus. The publish is
//! outbound-only and never re-enters ingestion, so a value is applied to the
//! store exactly once.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use chrono::{Local, Timelike};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::time::sleep;
use tracing::{debug, info, warn};

use sensorgrid::Quality;
use sensorgrid_gateway::{DataPayload, IngestionGateway, MessageBus, Topic};

use crate::synth::synthetic_value;

/// Simulator configuration
#[derive(Debug, Clone)]
pub struct SimulatorConfig {
    /// Period between generation ticks. One period for all sensors; each
    /// sensor's own `sampling_interval_secs` is stored but not enforced
    /// here.
    pub tick_interval: Duration,
    /// Random seed for reproducibility
    pub seed: Option<u64>,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            tick_interval: Duration::from_secs(30),
            seed: None,
        }
    }
}

impl SimulatorConfig {
    /// Create a default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the tick period
    pub fn with_tick_interval(mut self, interval: Duration) -> Self {
        self.tick_interval = interval;
        self
    }

    /// Set the random seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Lifecycle state of the simulator
#[derive(Debug, Default)]
pub struct SimulatorState {
    /// Whether the run loop is active
    pub running: AtomicBool,
    /// Completed generation ticks
    pub ticks: AtomicU64,
}

/// Periodic producer of synthetic readings for every active sensor
pub struct Simulator {
    gateway: Arc<IngestionGateway>,
    bus: Arc<dyn MessageBus>,
    config: SimulatorConfig,
    state: Arc<SimulatorState>,
    rng: Mutex<StdRng>,
}

impl Simulator {
    /// Create a simulator with default configuration
    pub fn new(gateway: Arc<IngestionGateway>, bus: Arc<dyn MessageBus>) -> Self {
        Self::with_config(gateway, bus, SimulatorConfig::default())
    }

    /// Create a simulator with custom configuration
    pub fn with_config(
        gateway: Arc<IngestionGateway>,
        bus: Arc<dyn MessageBus>,
        config: SimulatorConfig,
    ) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            gateway,
            bus,
            config,
            state: Arc::new(SimulatorState::default()),
            rng: Mutex::new(rng),
        }
    }

    /// Shared lifecycle state
    pub fn state(&self) -> Arc<SimulatorState> {
        Arc::clone(&self.state)
    }

    /// The configured tick period
    pub fn tick_interval(&self) -> Duration {
        self.config.tick_interval
    }

    /// Produce one synthetic reading per active sensor
    ///
    /// Per-sensor failures are logged and skipped; one bad sensor never
    /// halts the cycle. Returns the number of readings produced.
    pub fn tick(&self) -> usize {
        let hour = Local::now().hour();
        let sensors = self.gateway.store().list();
        let mut produced = 0;

        for sensor in sensors.iter().filter(|s| s.is_active()) {
            let value = {
                let mut rng = self.rng.lock().unwrap();
                synthetic_value(sensor.sensor_type, hour, &mut *rng)
            };

            let reading = match self.gateway.ingest(&sensor.id, value, Quality::Good) {
                Ok(reading) => reading,
                Err(e) => {
                    warn!("Skipping sensor {}: {}", sensor.id, e);
                    continue;
                }
            };
            produced += 1;
            debug!("Generated {}{} for {}", reading.value, sensor.unit, sensor.name);

            // Outward publish; fire-and-forget so a slow or dead bus never
            // stalls generation
            let topic = Topic::sensor_data(&sensor.id);
            let payload = DataPayload::new(reading.value)
                .with_quality(reading.quality)
                .with_timestamp(reading.timestamp);
            if let Err(e) = self.bus.publish(&topic, &payload.to_json()) {
                warn!("Publish to {} failed: {}", topic, e);
            }
        }

        self.state.ticks.fetch_add(1, Ordering::SeqCst);
        produced
    }

    /// Run ticks on the configured period until [`stop`](Self::stop)
    pub async fn run(&self) {
        self.state.running.store(true, Ordering::SeqCst);
        info!(
            "Starting simulator: tick every {:?}",
            self.config.tick_interval
        );

        while self.state.running.load(Ordering::SeqCst) {
            let produced = self.tick();
            debug!("Tick complete: {} readings", produced);
            sleep(self.config.tick_interval).await;
        }

        info!("Simulator stopped");
    }

    /// Stop the run loop after the current tick
    pub fn stop(&self) {
        self.state.running.store(false, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sensorgrid::{
        DeviceDirectory, MemoryDeviceDirectory, Sensor, SensorStatus, SensorStore, SensorType,
    };
    use sensorgrid_gateway::MemoryBus;

    fn make_simulator(bus: Arc<MemoryBus>) -> (Arc<SensorStore>, Simulator) {
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
        store
            .register(Sensor::new(
                "s-wind",
                "Wind speed",
                SensorType::WindSpeed,
                "m/s",
                "dev-1",
            ))
            .unwrap();
        store
            .register(
                Sensor::new("s-idle", "Spare", SensorType::Light, "lux", "dev-1")
                    .with_status(SensorStatus::Inactive),
            )
            .unwrap();

        let devices = Arc::new(MemoryDeviceDirectory::new());
        let gateway = Arc::new(IngestionGateway::new(
            Arc::clone(&store),
            devices as Arc<dyn DeviceDirectory>,
        ));

        let simulator = Simulator::with_config(
            gateway,
            bus as Arc<dyn MessageBus>,
            SimulatorConfig::new().with_seed(42),
        );
        (store, simulator)
    }

    #[test]
    fn test_tick_covers_active_sensors_only() {
        let bus = Arc::new(MemoryBus::new());
        let (store, simulator) = make_simulator(Arc::clone(&bus));

        let produced = simulator.tick();
        assert_eq!(produced, 2);
        assert_eq!(store.reading_count("s-temp").unwrap(), 1);
        assert_eq!(store.reading_count("s-wind").unwrap(), 1);
        assert_eq!(store.reading_count("s-idle").unwrap(), 0);
    }

    #[test]
    fn test_tick_publishes_without_reentering_ingest() {
        let bus = Arc::new(MemoryBus::new());
        let (store, simulator) = make_simulator(Arc::clone(&bus));

        simulator.tick();

        // One publish per produced reading, one reading per sensor: the
        // outward publish never loops back into the store
        let published = bus.take_published();
        assert_eq!(published.len(), 2);
        assert_eq!(store.reading_count("s-temp").unwrap(), 1);

        let topics: Vec<&str> = published.iter().map(|(t, _)| t.as_str()).collect();
        assert!(topics.contains(&"sensors/s-temp/data"));
        assert!(topics.contains(&"sensors/s-wind/data"));
    }

    #[test]
    fn test_published_payload_matches_stored_reading() {
        let bus = Arc::new(MemoryBus::new());
        let (store, simulator) = make_simulator(Arc::clone(&bus));

        simulator.tick();

        for (topic, payload) in bus.take_published() {
            let parsed = DataPayload::from_json(&payload).unwrap();
            let sensor_id = topic.split('/').nth(1).unwrap();
            let stored = store.latest(sensor_id).unwrap().unwrap();
            assert_eq!(parsed.value, stored.value);
            assert_eq!(parsed.timestamp, Some(stored.timestamp));
        }
    }

    #[test]
    fn test_dead_bus_does_not_stall_generation() {
        let bus = Arc::new(MemoryBus::new());
        let (store, simulator) = make_simulator(Arc::clone(&bus));
        bus.close();

        // Publishes fail, ingestion still commits for every sensor
        let produced = simulator.tick();
        assert_eq!(produced, 2);
        assert_eq!(store.reading_count("s-temp").unwrap(), 1);
        assert_eq!(store.reading_count("s-wind").unwrap(), 1);
    }

    #[test]
    fn test_tick_counter_advances() {
        let bus = Arc::new(MemoryBus::new());
        let (_store, simulator) = make_simulator(bus);

        simulator.tick();
        simulator.tick();
        assert_eq!(simulator.state().ticks.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_run_loop_stops_on_request() {
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
        let gateway = Arc::new(IngestionGateway::new(
            Arc::clone(&store),
            Arc::new(MemoryDeviceDirectory::new()) as Arc<dyn DeviceDirectory>,
        ));
        let simulator = Arc::new(Simulator::with_config(
            gateway,
            Arc::new(MemoryBus::new()) as Arc<dyn MessageBus>,
            SimulatorConfig::new()
                .with_tick_interval(Duration::from_millis(5))
                .with_seed(42),
        ));

        let state = simulator.state();
        let runner = {
            let simulator = Arc::clone(&simulator);
            tokio::spawn(async move { simulator.run().await })
        };

        sleep(Duration::from_millis(30)).await;
        assert!(state.running.load(Ordering::SeqCst));
        assert!(state.ticks.load(Ordering::SeqCst) >= 1);

        simulator.stop();
        runner.await.unwrap();
        assert!(!state.running.load(Ordering::SeqCst));
    }
}
