//! Injected clock abstraction.
//!
//! The old shop read wall-clock time directly inside the workflow, which made
//! duration bookkeeping untestable. Everything here goes through [`Clock`]
//! instead: [`SystemClock`] in production, [`ManualClock`] in tests.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Source of "now" in whole epoch seconds, the granularity all shop
/// timestamps use.
pub trait Clock: Send + Sync {
    fn now(&self) -> u64;
}

/// Wall-clock time.
#[derive(Debug, Default, Clone)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0)
    }
}

/// A hand-driven clock for tests. Starts at an arbitrary fixed instant and
/// only moves when told to.
#[derive(Debug, Default)]
pub struct ManualClock {
    secs: AtomicU64,
}

impl ManualClock {
    pub fn new(start_secs: u64) -> Arc<Self> {
        Arc::new(Self {
            secs: AtomicU64::new(start_secs),
        })
    }

    pub fn advance(&self, by: Duration) {
        self.secs.fetch_add(by.as_secs(), Ordering::SeqCst);
    }

    pub fn set(&self, secs: u64) {
        self.secs.store(secs, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> u64 {
        self.secs.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_clock_advances() {
        let clock = ManualClock::new(1_000);
        assert_eq!(clock.now(), 1_000);
        clock.advance(Duration::from_secs(30));
        assert_eq!(clock.now(), 1_030);
        clock.set(500);
        assert_eq!(clock.now(), 500);
    }
}
