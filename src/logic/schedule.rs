//! Refresh scheduling
//!
//! A single scheduler owns both polling cadences (parking status and
//! system stats) and reports which refreshes are due each loop
//! iteration. State-changing actions call `force` so the next poll
//! fires both immediately, keeping the displayed state consistent with
//! the server after any mutation.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DueRefreshes {
    pub status: bool,
    pub stats: bool,
}

#[derive(Debug)]
pub struct RefreshScheduler {
    status_interval: Duration,
    stats_interval: Duration,
    last_status: Instant,
    last_stats: Instant,
    forced: bool,
}

impl RefreshScheduler {
    pub fn new(status_interval: Duration, stats_interval: Duration, now: Instant) -> Self {
        Self {
            status_interval,
            stats_interval,
            last_status: now,
            last_stats: now,
            forced: false,
        }
    }

    /// Report due refreshes and reset their timers. Callers pass the
    /// current instant so tests can drive the cadence explicitly.
    pub fn poll(&mut self, now: Instant) -> DueRefreshes {
        let status = self.forced || now.duration_since(self.last_status) >= self.status_interval;
        let stats = self.forced || now.duration_since(self.last_stats) >= self.stats_interval;
        if status {
            self.last_status = now;
        }
        if stats {
            self.last_stats = now;
        }
        self.forced = false;
        DueRefreshes { status, stats }
    }

    /// Make the next `poll` fire every refresh regardless of elapsed
    /// time. Called after state-changing actions succeed.
    pub fn force(&mut self) {
        self.forced = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scheduler(now: Instant) -> RefreshScheduler {
        RefreshScheduler::new(Duration::from_secs(10), Duration::from_secs(30), now)
    }

    #[test]
    fn nothing_due_before_intervals_elapse() {
        let t0 = Instant::now();
        let mut sched = scheduler(t0);
        let due = sched.poll(t0 + Duration::from_secs(5));
        assert!(!due.status);
        assert!(!due.stats);
    }

    #[test]
    fn status_fires_before_stats() {
        let t0 = Instant::now();
        let mut sched = scheduler(t0);

        let due = sched.poll(t0 + Duration::from_secs(10));
        assert!(due.status);
        assert!(!due.stats);

        // Status timer reset at t0+10, so t0+19 is not due again
        let due = sched.poll(t0 + Duration::from_secs(19));
        assert!(!due.status);

        let due = sched.poll(t0 + Duration::from_secs(30));
        assert!(due.status);
        assert!(due.stats);
    }

    #[test]
    fn force_fires_both_immediately_and_once() {
        let t0 = Instant::now();
        let mut sched = scheduler(t0);

        sched.force();
        let due = sched.poll(t0 + Duration::from_secs(1));
        assert!(due.status);
        assert!(due.stats);

        // Forced flag is consumed; next poll is back on cadence
        let due = sched.poll(t0 + Duration::from_secs(2));
        assert!(!due.status);
        assert!(!due.stats);
    }

    #[test]
    fn force_resets_timers() {
        let t0 = Instant::now();
        let mut sched = scheduler(t0);

        sched.force();
        sched.poll(t0 + Duration::from_secs(9));

        // The forced refresh at t0+9 counts as the last one; cadence
        // resumes relative to it.
        let due = sched.poll(t0 + Duration::from_secs(18));
        assert!(!due.status);
        let due = sched.poll(t0 + Duration::from_secs(19));
        assert!(due.status);
    }
}
