use std::time::Duration;

use tokio::time::{Instant, Interval, MissedTickBehavior, interval_at};

/// Fixed-period tick source polled from the session loop
///
/// Dropping a `Ticker` cancels it. Must be created inside a tokio runtime.
pub struct Ticker {
    interval: Interval,
}

impl Ticker {
    /// Start ticking; the first tick comes one full `period` from now
    pub fn start(period: Duration) -> Self {
        let mut interval = interval_at(Instant::now() + period, period);
        // A slow frame delays the schedule instead of bursting catch-up ticks
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        Self { interval }
    }

    pub async fn tick(&mut self) {
        self.interval.tick().await;
    }

    pub fn period(&self) -> Duration {
        self.interval.period()
    }
}
