//! Connection establishment subsystem.
//!
//! # Data Flow
//! ```text
//! establish(source, policy)
//!     → establisher.rs (scope captured from policy.global)
//!     → scoped slot already filled? return it
//!     → otherwise: source.rs connect()
//!         → failure: resilience::retries decides Retry / Exhausted / Backoff
//!         → success: store in scoped slot, return handle
//! ```
//!
//! # Design Decisions
//! - Capability contract is a trait: a missing `connect` is a build error
//! - Connect errors are absorbed by the loop unless the policy opts into failing
//! - Handles are shared as `Arc`, so reuse is observable as pointer identity

pub mod error;
pub mod establisher;
pub mod policy;
pub mod source;
pub mod stats;

pub use error::{report, EstablishError};
pub use establisher::{establish, Establisher};
pub use policy::{EstablishPolicy, Exhaustion};
pub use source::Source;
pub use stats::EstablishStats;
