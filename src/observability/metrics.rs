//! Metrics collection.
//!
//! # Metrics
//! - `sources_connect_attempts_total` (counter): connect calls by source
//! - `sources_connect_failures_total` (counter): failed connect calls by source
//! - `sources_backoff_sleeps_total` (counter): fallback sleeps by source
//! - `sources_established_total` (counter): successful establishments by source, scope
//! - `sources_establish_attempts` (histogram): attempts needed per establishment

use metrics::{counter, histogram};

pub fn record_attempt(source: &'static str) {
    counter!("sources_connect_attempts_total", "source" => source).increment(1);
}

pub fn record_failure(source: &'static str) {
    counter!("sources_connect_failures_total", "source" => source).increment(1);
}

pub fn record_backoff(source: &'static str) {
    counter!("sources_backoff_sleeps_total", "source" => source).increment(1);
}

/// Record a successful establishment and how many attempts it took.
pub fn record_established(source: &'static str, scope: &'static str, attempts: u64) {
    counter!("sources_established_total", "source" => source, "scope" => scope).increment(1);
    histogram!("sources_establish_attempts", "source" => source).record(attempts as f64);
}
