//! Simulated metrics source.
//!
//! `MetricSim` advances a bounded random walk over the live readings;
//! `Ticker` owns the scheduled task that drives it and feeds updates to the
//! event loop over a channel. Nothing here reads real system telemetry.

use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::constants::*;
use crate::models::{HistoryBuffer, MetricSnapshot};

/// One tick's worth of output: the full metric bundle plus a fresh
/// CPU history sample.
#[derive(Debug, Clone, Copy)]
pub struct TickUpdate {
    pub metrics: MetricSnapshot,
    pub cpu_sample: f32,
}

/// Random-walk generator for the metric bundle.
///
/// Each call to [`tick`](MetricSim::tick) nudges the live readings by a
/// bounded step and clamps them back into range. Seeding with the same
/// value reproduces the same trajectory.
pub struct MetricSim {
    rng: StdRng,
    metrics: MetricSnapshot,
}

impl MetricSim {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_entropy(),
        };
        Self {
            rng,
            metrics: MetricSnapshot::default(),
        }
    }

    /// The current readings (initial values before the first tick).
    pub fn metrics(&self) -> MetricSnapshot {
        self.metrics
    }

    /// Fill `history` to capacity with startup samples so the chart is
    /// populated before the first tick.
    pub fn seed_history(&mut self, history: &mut HistoryBuffer) {
        while history.len() < history.capacity() {
            let sample = self.history_sample();
            history.push(sample);
        }
    }

    /// Advance every live metric by one step and draw a fresh history
    /// sample. `disk_usage` is deliberately left alone.
    pub fn tick(&mut self) -> TickUpdate {
        self.metrics.cpu_usage =
            self.walk(self.metrics.cpu_usage, CPU_WALK_SCALE, CPU_MIN_PCT, CPU_MAX_PCT);
        self.metrics.memory_usage =
            self.walk(self.metrics.memory_usage, MEM_WALK_SCALE, MEM_MIN_PCT, MEM_MAX_PCT);
        self.metrics.network_in = self.walk_rate(self.metrics.network_in, NET_IN_WALK_SCALE);
        self.metrics.network_out = self.walk_rate(self.metrics.network_out, NET_OUT_WALK_SCALE);

        TickUpdate {
            metrics: self.metrics,
            cpu_sample: self.history_sample(),
        }
    }

    /// `value + (rand - 0.5) * scale`, clamped to `[min, max]`.
    fn walk(&mut self, value: f32, scale: f32, min: f32, max: f32) -> f32 {
        let step = (self.rng.gen::<f32>() - 0.5) * scale;
        (value + step).clamp(min, max)
    }

    /// Same walk for rates: bounded below by zero, unbounded above.
    fn walk_rate(&mut self, value: f64, scale: f64) -> f64 {
        let step = (self.rng.gen::<f64>() - 0.5) * scale;
        (value + step).max(0.0)
    }

    fn history_sample(&mut self) -> f32 {
        self.rng.gen_range(HISTORY_SAMPLE_MIN..HISTORY_SAMPLE_MAX)
    }
}

/// The scheduled task that drives the simulation.
///
/// Spawns an interval loop that ticks the sim and pushes each update into
/// an unbounded channel. The task ends when the receiver is dropped, and is
/// aborted outright when the `Ticker` itself is dropped -- either way no
/// update is produced after teardown.
pub struct Ticker {
    handle: JoinHandle<()>,
}

impl Ticker {
    pub fn spawn(mut sim: MetricSim, interval_ms: u64) -> (Self, mpsc::UnboundedReceiver<TickUpdate>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(Duration::from_millis(interval_ms));
            // The first interval tick completes immediately; consume it so
            // the initial readings stay visible for one full period.
            interval.tick().await;
            loop {
                interval.tick().await;
                if tx.send(sim.tick()).is_err() {
                    break;
                }
            }
            debug!("ticker task stopped");
        });
        (Self { handle }, rx)
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::HistoryBuffer;

    #[test]
    fn initial_metrics_before_first_tick() {
        let sim = MetricSim::new(Some(7));
        let m = sim.metrics();
        assert_eq!(m.cpu_usage, CPU_INITIAL_PCT);
        assert_eq!(m.memory_usage, MEM_INITIAL_PCT);
    }

    #[test]
    fn metrics_stay_within_bounds_over_many_ticks() {
        let mut sim = MetricSim::new(Some(42));
        for _ in 0..10_000 {
            let update = sim.tick();
            let m = update.metrics;
            assert!(m.cpu_usage >= CPU_MIN_PCT && m.cpu_usage <= CPU_MAX_PCT);
            assert!(m.memory_usage >= MEM_MIN_PCT && m.memory_usage <= MEM_MAX_PCT);
            assert!(m.network_in >= 0.0);
            assert!(m.network_out >= 0.0);
            assert!(update.cpu_sample >= HISTORY_SAMPLE_MIN);
            assert!(update.cpu_sample < HISTORY_SAMPLE_MAX);
        }
    }

    #[test]
    fn disk_usage_never_moves() {
        let mut sim = MetricSim::new(Some(3));
        for _ in 0..500 {
            assert_eq!(sim.tick().metrics.disk_usage, DISK_USAGE_PCT);
        }
    }

    #[test]
    fn same_seed_same_trajectory() {
        let mut a = MetricSim::new(Some(123));
        let mut b = MetricSim::new(Some(123));
        for _ in 0..100 {
            let ua = a.tick();
            let ub = b.tick();
            assert_eq!(ua.metrics, ub.metrics);
            assert_eq!(ua.cpu_sample, ub.cpu_sample);
        }
    }

    #[test]
    fn different_seeds_diverge() {
        let mut a = MetricSim::new(Some(1));
        let mut b = MetricSim::new(Some(2));
        let diverged = (0..10).any(|_| a.tick().metrics != b.tick().metrics);
        assert!(diverged);
    }

    #[test]
    fn seed_history_fills_to_capacity_in_range() {
        let mut sim = MetricSim::new(Some(9));
        let mut history = HistoryBuffer::new(CPU_HISTORY_LEN);
        sim.seed_history(&mut history);
        assert_eq!(history.len(), CPU_HISTORY_LEN);
        for sample in history.iter() {
            assert!(sample >= HISTORY_SAMPLE_MIN && sample < HISTORY_SAMPLE_MAX);
        }
    }

    #[tokio::test]
    async fn ticker_delivers_updates() {
        let sim = MetricSim::new(Some(5));
        let (_ticker, mut rx) = Ticker::spawn(sim, 10);
        let update = rx.recv().await.expect("ticker should deliver an update");
        assert!(update.metrics.cpu_usage >= CPU_MIN_PCT);
    }

    #[tokio::test]
    async fn dropping_ticker_stops_updates() {
        let sim = MetricSim::new(Some(5));
        let (ticker, mut rx) = Ticker::spawn(sim, 10);
        let _ = rx.recv().await.expect("first update");
        drop(ticker);
        // The aborted task drops its sender; the channel drains then closes.
        while rx.recv().await.is_some() {}
        assert!(rx.recv().await.is_none());
    }

    #[tokio::test]
    async fn dropping_receiver_ends_task() {
        let sim = MetricSim::new(Some(5));
        let (ticker, rx) = Ticker::spawn(sim, 10);
        drop(rx);
        // With no receiver the next send fails and the task returns.
        let _ = tokio::time::timeout(Duration::from_secs(1), async {
            loop {
                if ticker.handle.is_finished() {
                    break;
                }
                tokio::time::sleep(Duration::from_millis(5)).await;
            }
        })
        .await
        .expect("ticker task should end once the receiver is gone");
    }
}
