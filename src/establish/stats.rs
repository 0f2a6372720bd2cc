//! Per-establisher attempt counters.

use std::sync::atomic::{AtomicU64, Ordering};

/// Snapshot of an establisher's activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EstablishStats {
    /// `connect` calls made.
    pub attempts: u64,
    /// `connect` calls that failed.
    pub failures: u64,
    /// Fallback sleeps taken.
    pub sleeps: u64,
}

#[derive(Debug, Default)]
pub(crate) struct AttemptCounters {
    attempts: AtomicU64,
    failures: AtomicU64,
    sleeps: AtomicU64,
}

impl AttemptCounters {
    pub(crate) fn record_attempt(&self) {
        self.attempts.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_failure(&self) {
        self.failures.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_sleep(&self) {
        self.sleeps.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn snapshot(&self) -> EstablishStats {
        EstablishStats {
            attempts: self.attempts.load(Ordering::Relaxed),
            failures: self.failures.load(Ordering::Relaxed),
            sleeps: self.sleeps.load(Ordering::Relaxed),
        }
    }
}
