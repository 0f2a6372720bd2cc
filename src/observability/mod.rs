//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Establisher produces:
//!     → logging.rs (error/debug record per failed attempt, info on success)
//!     → metrics.rs (attempt, failure, backoff and establishment counters)
//!
//! Consumers:
//!     → Host application's tracing subscriber, or stdout by default
//!     → Host application's metrics recorder (no-op when none is installed)
//! ```
//!
//! # Design Decisions
//! - Structured fields (source, attempt, scope) on every event
//! - The library never forces a subscriber or recorder on its host

pub mod logging;
pub mod metrics;
