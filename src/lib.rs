//! Establish long-lived connections with retry, backoff and scoping.
//!
//! ```text
//!     establish(source, policy)
//!            │
//!            ▼
//!     ┌──────────────┐   global    ┌──────────────────────┐
//!     │    scope     │────────────▶│ registry (per type)  │
//!     │              │   local     ├──────────────────────┤
//!     │              │────────────▶│ establisher's slot   │
//!     └──────┬───────┘             └──────────▲───────────┘
//!            │ slot empty                     │ store
//!            ▼                                │
//!     ┌──────────────┐  failure   ┌───────────┴──────────┐
//!     │   connect    │───────────▶│ resilience (retries) │
//!     │  (Source)    │◀───────────│ retry / fallback     │
//!     └──────────────┘            └──────────────────────┘
//! ```
//!
//! Implement [`Source`] for a resource, then call [`establish`]:
//!
//! ```ignore
//! let policy = EstablishPolicy::default().with_retries(5);
//! let conn = sources::establish(Postgres::new(url), policy).await?;
//! ```

pub mod config;
pub mod establish;
pub mod observability;
pub mod resilience;
pub mod scope;

pub use config::SourcesConfig;
pub use establish::{
    establish, EstablishError, EstablishPolicy, EstablishStats, Establisher, Exhaustion, Source,
};
pub use scope::registry;
