// SensorGrid Gateway - Ingestion entry point
// Copyright (c) 2026 SensorGrid Contributors
//
// Licensed under AGPL-3.0. See LICENSE file for details.

//! Message-bus abstraction.
//!
//! [`MessageBus`] is the seam toward the broker: `publish` is outbound and
//! best-effort, `subscribe` registers a handler the broker invokes on
//! delivery. A publisher never hears its own publish locally, so a producer
//! that also subscribes to the same topic (the generator loopback) applies
//! each value exactly once.
//!
//! [`MemoryBus`] is the in-process implementation used by tests and the demo
//! agent: `inject` plays the broker's delivery role and `take_published`
//! drains the outbound side.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, RwLock};

use thiserror::Error;

use crate::topic::topic_matches;

/// Handler invoked for each delivered message
pub type MessageHandler = Box<dyn Fn(&str, &[u8]) + Send + Sync>;

/// Errors raised by a bus implementation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BusError {
    /// Bus is closed or unreachable
    #[error("Bus disconnected: {reason}")]
    Disconnected { reason: String },

    /// Outbound buffer is full
    #[error("Outbound buffer full")]
    BufferFull,
}

/// Statistics about bus usage
#[derive(Debug, Clone, Copy, Default)]
pub struct BusMetrics {
    /// Messages accepted for outbound delivery
    pub messages_published: u64,
    /// Bytes accepted for outbound delivery
    pub bytes_published: u64,
    /// Inbound messages delivered to at least one handler
    pub messages_delivered: u64,
}

/// Trait for message buses
pub trait MessageBus: Send + Sync {
    /// Queue a message for outbound delivery. Best-effort: callers log and
    /// discard failures.
    fn publish(&self, topic: &str, payload: &[u8]) -> Result<(), BusError>;

    /// Register a handler for every topic matching `pattern`
    fn subscribe(&self, pattern: &str, handler: MessageHandler) -> Result<(), BusError>;
}

struct Subscription {
    pattern: String,
    handler: MessageHandler,
}

/// In-process bus for tests and local composition
pub struct MemoryBus {
    subscriptions: RwLock<Vec<Subscription>>,
    outbound: Mutex<VecDeque<(String, Vec<u8>)>>,
    max_outbound: usize,
    open: AtomicBool,
    metrics: Mutex<BusMetrics>,
}

impl MemoryBus {
    /// Create a bus with the default outbound capacity
    pub fn new() -> Self {
        Self::with_outbound_capacity(1000)
    }

    /// Create a bus with a custom outbound capacity
    pub fn with_outbound_capacity(max_outbound: usize) -> Self {
        Self {
            subscriptions: RwLock::new(Vec::new()),
            outbound: Mutex::new(VecDeque::new()),
            max_outbound,
            open: AtomicBool::new(true),
            metrics: Mutex::new(BusMetrics::default()),
        }
    }

    /// Deliver an inbound message to every matching handler, as a broker
    /// would. Returns the number of handlers invoked.
    pub fn inject(&self, topic: &str, payload: &[u8]) -> usize {
        let subscriptions = self.subscriptions.read().unwrap();
        let mut delivered = 0;
        for subscription in subscriptions
            .iter()
            .filter(|s| topic_matches(&s.pattern, topic))
        {
            (subscription.handler)(topic, payload);
            delivered += 1;
        }
        if delivered > 0 {
            self.metrics.lock().unwrap().messages_delivered += 1;
        }
        delivered
    }

    /// Drain the outbound buffer
    pub fn take_published(&self) -> Vec<(String, Vec<u8>)> {
        self.outbound.lock().unwrap().drain(..).collect()
    }

    /// Number of queued outbound messages
    pub fn published_count(&self) -> usize {
        self.outbound.lock().unwrap().len()
    }

    /// Close the bus; further publishes fail with `Disconnected`
    pub fn close(&self) {
        self.open.store(false, Ordering::SeqCst);
    }

    /// Whether the bus accepts publishes
    pub fn is_open(&self) -> bool {
        self.open.load(Ordering::SeqCst)
    }

    /// Usage counters
    pub fn metrics(&self) -> BusMetrics {
        *self.metrics.lock().unwrap()
    }
}

impl Default for MemoryBus {
    fn default() -> Self {
        Self::new()
    }
}

impl MessageBus for MemoryBus {
    fn publish(&self, topic: &str, payload: &[u8]) -> Result<(), BusError> {
        if !self.is_open() {
            return Err(BusError::Disconnected {
                reason: "bus is closed".to_string(),
            });
        }

        let mut outbound = self.outbound.lock().unwrap();
        if outbound.len() >= self.max_outbound {
            return Err(BusError::BufferFull);
        }
        outbound.push_back((topic.to_string(), payload.to_vec()));

        let mut metrics = self.metrics.lock().unwrap();
        metrics.messages_published += 1;
        metrics.bytes_published += payload.len() as u64;

        Ok(())
    }

    fn subscribe(&self, pattern: &str, handler: MessageHandler) -> Result<(), BusError> {
        if !self.is_open() {
            return Err(BusError::Disconnected {
                reason: "bus is closed".to_string(),
            });
        }
        self.subscriptions.write().unwrap().push(Subscription {
            pattern: pattern.to_string(),
            handler,
        });
        Ok(())
    }
}
