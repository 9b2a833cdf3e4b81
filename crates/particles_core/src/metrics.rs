//! Performance metrics collection for the simulation.
//!
//! Provides structured logging and counters for monitoring frame times and
//! settings traffic.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// Ticks between two summary log lines.
const SUMMARY_INTERVAL: u64 = 1000;

/// Metrics collector for a running simulation.
pub struct Metrics {
    tick_count: AtomicU64,
    entity_count: AtomicU64,
    rule_count: AtomicU64,
    last_frame_micros: AtomicU64,
    rejected_settings: AtomicU64,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    #[must_use]
    pub fn new() -> Self {
        Self {
            tick_count: AtomicU64::new(0),
            entity_count: AtomicU64::new(0),
            rule_count: AtomicU64::new(0),
            last_frame_micros: AtomicU64::new(0),
            rejected_settings: AtomicU64::new(0),
        }
    }

    /// Records a completed tick+render frame.
    pub fn record_frame(&self, duration: Duration, entities: usize, rules: usize) {
        let tick = self.tick_count.fetch_add(1, Ordering::Relaxed) + 1;
        self.entity_count.store(entities as u64, Ordering::Relaxed);
        self.rule_count.store(rules as u64, Ordering::Relaxed);
        self.last_frame_micros
            .store(duration.as_micros() as u64, Ordering::Relaxed);

        if tick % SUMMARY_INTERVAL == 0 {
            tracing::info!(
                tick = tick,
                entities = entities,
                rules = rules,
                frame_us = duration.as_micros() as u64,
                "Simulation frame"
            );
        }
    }

    /// Counts a settings payload that was refused.
    pub fn record_rejected_settings(&self) {
        self.rejected_settings.fetch_add(1, Ordering::Relaxed);
    }

    #[must_use]
    pub fn tick_count(&self) -> u64 {
        self.tick_count.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn entity_count(&self) -> u64 {
        self.entity_count.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn rule_count(&self) -> u64 {
        self.rule_count.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn last_frame_duration(&self) -> Duration {
        Duration::from_micros(self.last_frame_micros.load(Ordering::Relaxed))
    }

    #[must_use]
    pub fn rejected_settings(&self) -> u64 {
        self.rejected_settings.load(Ordering::Relaxed)
    }
}

/// Initialize tracing subscriber for logging.
///
/// Honors `RUST_LOG`, defaulting to `info`. Output goes
/// to stderr so it never mixes with a terminal UI or exported settings.
pub fn init_logging() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()
        .ok();
}
