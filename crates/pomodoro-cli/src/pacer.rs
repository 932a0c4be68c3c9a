//! The once-per-second driver.
//!
//! A `Pacer` holds an interval only while the timer runs. It is armed on
//! start and dropped on pause, completion, reset, mode switch and teardown,
//! so no recurring callback outlives the running state.

use std::time::Duration;
use tokio::time::{interval_at, Instant, Interval, MissedTickBehavior};

pub const TICK_PERIOD: Duration = Duration::from_secs(1);

#[derive(Debug, Default)]
pub struct Pacer {
    interval: Option<Interval>,
}

impl Pacer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_armed(&self) -> bool {
        self.interval.is_some()
    }

    /// Arm or release the interval to match the timer's running flag.
    pub fn sync(&mut self, running: bool) {
        match (running, self.interval.is_some()) {
            (true, false) => {
                // First tick one full period after start, never immediately.
                let mut interval = interval_at(Instant::now() + TICK_PERIOD, TICK_PERIOD);
                interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
                self.interval = Some(interval);
            }
            (false, true) => self.interval = None,
            _ => {}
        }
    }

    /// Wait for the next tick. Never resolves while released.
    pub async fn tick(&mut self) {
        match self.interval.as_mut() {
            Some(interval) => {
                interval.tick().await;
            }
            None => std::future::pending::<()>().await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn first_tick_waits_a_full_period() {
        let mut pacer = Pacer::new();
        pacer.sync(true);
        let started = Instant::now();
        pacer.tick().await;
        assert_eq!(started.elapsed(), TICK_PERIOD);
        pacer.tick().await;
        assert_eq!(started.elapsed(), TICK_PERIOD * 2);
    }

    #[tokio::test(start_paused = true)]
    async fn released_pacer_never_ticks() {
        let mut pacer = Pacer::new();
        pacer.sync(true);
        pacer.sync(false);
        assert!(!pacer.is_armed());
        let waited = tokio::time::timeout(Duration::from_secs(10), pacer.tick()).await;
        assert!(waited.is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn sync_while_armed_keeps_phase() {
        let mut pacer = Pacer::new();
        pacer.sync(true);
        tokio::time::advance(Duration::from_millis(600)).await;
        pacer.sync(true);
        let before = Instant::now();
        pacer.tick().await;
        assert_eq!(before.elapsed(), Duration::from_millis(400));
    }
}
