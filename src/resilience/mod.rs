//! Resilience subsystem.
//!
//! # Data Flow
//! ```text
//! Connect attempt fails:
//!     → retries.rs (consume retry budget, decide Retry / Exhausted / Backoff)
//!     → Retry: attempt again immediately
//!     → Exhausted / Backoff: sleep the fixed fallback interval, then attempt again
//! ```
//!
//! # Design Decisions
//! - Backoff is fixed, never exponential or jittered
//! - The retry budget is a threshold for sleeping, not a failure budget
//! - Required sources never consume the budget

pub mod retries;

pub use retries::{Decision, RetryBudget};
