//! Periodic tick sources. The game asks how many intervals have elapsed
//! instead of being called back, which lets tests drive time by hand.

use std::time::{Duration, Instant};

pub trait Timer {
    /// Starts (or restarts) counting intervals from now.
    fn start(&mut self, interval: Duration);

    /// Stops counting. Calling it while stopped is a no-op.
    fn stop(&mut self);

    fn is_running(&self) -> bool;

    /// Number of whole intervals completed since the last call.
    fn due_ticks(&mut self) -> u32;
}

/// Wall-clock timer.
#[derive(Debug, Default)]
pub struct IntervalTimer {
    interval: Duration,
    next_due: Option<Instant>,
}

impl IntervalTimer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Timer for IntervalTimer {
    fn start(&mut self, interval: Duration) {
        self.interval = interval;
        self.next_due = Some(Instant::now() + interval);
    }

    fn stop(&mut self) {
        self.next_due = None;
    }

    fn is_running(&self) -> bool {
        self.next_due.is_some()
    }

    fn due_ticks(&mut self) -> u32 {
        let Some(mut next_due) = self.next_due else { return 0 };
        if self.interval.is_zero() {
            return 0;
        }

        let now = Instant::now();
        let mut ticks = 0;
        while next_due <= now {
            next_due += self.interval;
            ticks += 1;
        }

        self.next_due = Some(next_due);
        ticks
    }
}

/// Simulated clock for deterministic stepping.
#[derive(Debug, Default)]
pub struct ManualTimer {
    interval: Option<Duration>,
    pending: Duration,
    starts: usize,
}

impl ManualTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves simulated time forward. Ignored while stopped.
    pub fn advance(&mut self, by: Duration) {
        if self.interval.is_some() {
            self.pending += by;
        }
    }

    pub fn interval(&self) -> Option<Duration> {
        self.interval
    }

    /// How many times `start` has been called.
    pub fn starts(&self) -> usize {
        self.starts
    }
}

impl Timer for ManualTimer {
    fn start(&mut self, interval: Duration) {
        self.interval = Some(interval);
        self.pending = Duration::ZERO;
        self.starts += 1;
    }

    fn stop(&mut self) {
        self.interval = None;
        self.pending = Duration::ZERO;
    }

    fn is_running(&self) -> bool {
        self.interval.is_some()
    }

    fn due_ticks(&mut self) -> u32 {
        match self.interval {
            Some(interval) if !interval.is_zero() => {
                let ticks = (self.pending.as_nanos() / interval.as_nanos()) as u32;
                self.pending -= interval * ticks;
                ticks
            }
            _ => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INTERVAL: Duration = Duration::from_millis(100);

    #[test]
    fn manual_timer_counts_whole_intervals() {
        let mut timer = ManualTimer::new();
        timer.start(INTERVAL);

        timer.advance(Duration::from_millis(250));
        assert_eq!(timer.due_ticks(), 2);
        assert_eq!(timer.due_ticks(), 0);

        timer.advance(Duration::from_millis(50));
        assert_eq!(timer.due_ticks(), 1);
    }

    #[test]
    fn stopped_timer_never_fires() {
        let mut timer = ManualTimer::new();
        timer.advance(Duration::from_secs(1));
        assert_eq!(timer.due_ticks(), 0);

        timer.start(INTERVAL);
        timer.stop();
        timer.stop();
        timer.advance(Duration::from_secs(1));
        assert!(!timer.is_running());
        assert_eq!(timer.due_ticks(), 0);
    }

    #[test]
    fn interval_timer_stop_is_idempotent() {
        let mut timer = IntervalTimer::new();
        timer.stop();
        assert!(!timer.is_running());

        timer.start(Duration::from_secs(3600));
        assert!(timer.is_running());
        assert_eq!(timer.due_ticks(), 0);

        timer.stop();
        timer.stop();
        assert!(!timer.is_running());
        assert_eq!(timer.due_ticks(), 0);
    }
}
