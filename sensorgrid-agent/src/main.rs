// SensorGrid Agent - Demo pipeline wiring
// Copyright (c) 2026 SensorGrid Contributors
//
// Licensed under AGPL-3.0. See LICENSE file for details.

//! # SensorGrid Agent
//!
//! Demo service wiring the full pipeline: an in-memory store, the ingestion
//! gateway bound to a message bus, and the synthetic generator. The alert
//! sweep is rendered through tracing, standing in for the UI consumer.
//!
//! ## Usage
//!
//! ```bash
//! # Tick every 30 seconds (the default cadence)
//! sensorgrid-agent
//!
//! # Faster ticks with a reproducible seed
//! sensorgrid-agent --tick-secs 5 --seed 42
//! ```

use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use tokio::time::sleep;
use tracing::{info, warn, Level};
use tracing_subscriber::EnvFilter;

use sensorgrid::{DeviceDirectory, MemoryDeviceDirectory, QueryService, SensorStore};
use sensorgrid_gateway::{IngestionGateway, MemoryBus, MessageBus};
use sensorgrid_simulator::{presets, Simulator, SimulatorConfig};

/// SensorGrid demo agent
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Seconds between generator ticks
    #[arg(short, long, default_value = "30")]
    tick_secs: u64,

    /// Seconds between alert sweeps
    #[arg(short, long, default_value = "30")]
    alert_secs: u64,

    /// Random seed for reproducible generation
    #[arg(short, long)]
    seed: Option<u64>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    // Initialize tracing
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = match args.log_level.to_lowercase().as_str() {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "info" => Level::INFO,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::INFO,
        };
        EnvFilter::from_default_env().add_directive(level.into())
    });
    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!("SensorGrid Agent v{}", env!("CARGO_PKG_VERSION"));

    // Assemble the pipeline
    let store = Arc::new(SensorStore::new());
    let devices = Arc::new(MemoryDeviceDirectory::new());

    let (device, sensors) = presets::weather_station("dev-1", "North mast", "st-1");
    devices.register(device);
    for sensor in sensors {
        if let Err(e) = store.register(sensor) {
            warn!("Failed to register sensor: {}", e);
        }
    }
    info!("Seeded {} sensors on 1 device", store.count());

    let bus = Arc::new(MemoryBus::new());
    let gateway = Arc::new(IngestionGateway::new(
        Arc::clone(&store),
        Arc::clone(&devices) as Arc<dyn DeviceDirectory>,
    ));
    if let Err(e) = IngestionGateway::bind(&gateway, bus.as_ref()) {
        warn!("Failed to bind gateway to bus: {}", e);
    }

    let simulator = Arc::new(Simulator::with_config(
        Arc::clone(&gateway),
        Arc::clone(&bus) as Arc<dyn MessageBus>,
        {
            let config = SimulatorConfig::new()
                .with_tick_interval(Duration::from_secs(args.tick_secs));
            match args.seed {
                Some(seed) => config.with_seed(seed),
                None => config,
            }
        },
    ));

    // Start generation in the background
    {
        let simulator = Arc::clone(&simulator);
        tokio::spawn(async move {
            simulator.run().await;
        });
    }

    // Periodically render the query surface, standing in for the UI
    let queries = QueryService::new(Arc::clone(&store));
    let alert_secs = args.alert_secs;
    let sweep = tokio::spawn(async move {
        loop {
            sleep(Duration::from_secs(alert_secs)).await;

            let overview = queries.overview();
            let alerts = queries.alerts();
            info!(
                "{} sensors ({} active), {} active alerts",
                overview.sensors, overview.active_sensors, alerts.len()
            );
            for alert in &alerts {
                warn!("{}: {}", alert.sensor_name, alert.message);
            }
        }
    });

    tokio::signal::ctrl_c().await.ok();
    info!("Shutting down");
    simulator.stop();
    sweep.abort();
}
