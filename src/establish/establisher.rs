//! Connection establishment with retry and scoping.
//!
//! # Responsibilities
//! - Reuse an already established connection for the captured scope
//! - Run the retry loop until `connect` succeeds
//! - Log every failed attempt and back off per policy
//! - Store the handle in the global or local slot
//!
//! # Design Decisions
//! - The loop runs on the calling task; nothing is spawned
//! - Establishment is serialized per slot, so a global source connects once
//!   even when many tasks race to establish it
//! - No native cancellation: wrap the call in `tokio::time::timeout`.
//!   Dropping the future releases the gate and leaves the slot untouched

use std::sync::Arc;

use crate::establish::error::{report, EstablishError};
use crate::establish::policy::{EstablishPolicy, Exhaustion};
use crate::establish::source::Source;
use crate::establish::stats::{AttemptCounters, EstablishStats};
use crate::observability::metrics;
use crate::resilience::{Decision, RetryBudget};
use crate::scope::{registry, Scope, Slot};

/// Establish a connection for `source` under `policy`.
///
/// With a global policy and an existing global connection for this source
/// type, the existing handle is returned without connecting.
///
/// Failed attempts are reported through `tracing`. Without a subscriber they
/// go nowhere; call [`logging::init`](crate::observability::logging::init)
/// at startup to get the default stdout output.
pub async fn establish<S: Source>(
    source: S,
    policy: EstablishPolicy,
) -> Result<Arc<S::Connection>, EstablishError<S::Error>> {
    Establisher::new(source, policy).establish().await
}

/// Drives a [`Source`] to a connected handle.
pub struct Establisher<S: Source> {
    source: S,
    policy: EstablishPolicy,
    scope: Scope<S::Connection>,
    counters: AttemptCounters,
}

impl<S: Source> Establisher<S> {
    /// Create an establisher. The scope is fixed here from `policy.global`.
    pub fn new(source: S, policy: EstablishPolicy) -> Self {
        let scope = if policy.global {
            Scope::Global(registry::slot::<S>())
        } else {
            Scope::Local(Slot::new())
        };

        Self {
            source,
            policy,
            scope,
            counters: AttemptCounters::default(),
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn policy(&self) -> &EstablishPolicy {
        &self.policy
    }

    pub fn is_global(&self) -> bool {
        self.scope.is_global()
    }

    /// The connection held by this establisher's scope.
    pub fn connection(&self) -> Option<Arc<S::Connection>> {
        self.scope.slot().get()
    }

    /// Replace the connection held by this establisher's scope.
    pub fn set_connection(&self, connection: Arc<S::Connection>) {
        self.scope.slot().set(connection);
    }

    /// Check the scoped connection. False when there is none.
    pub fn is_open(&self) -> bool {
        self.connection()
            .is_some_and(|connection| self.source.is_open(&connection))
    }

    pub fn is_closed(&self) -> bool {
        !self.is_open()
    }

    pub fn stats(&self) -> EstablishStats {
        self.counters.snapshot()
    }

    /// Return the scoped connection, connecting first if there is none.
    ///
    /// In the default [`Exhaustion::Retry`] mode this never returns `Err`:
    /// it either yields a connected handle or keeps trying.
    pub async fn establish(&self) -> Result<Arc<S::Connection>, EstablishError<S::Error>> {
        let slot = self.scope.slot();
        if let Some(existing) = self.reuse(slot) {
            return Ok(existing);
        }

        let _gate = slot.lock().await;
        // Another establisher may have filled the slot while we waited.
        if let Some(existing) = self.reuse(slot) {
            return Ok(existing);
        }

        let (connection, attempts) = self.connect_with_retry().await?;
        let connection = Arc::new(connection);
        slot.set(Arc::clone(&connection));

        metrics::record_established(self.source.name(), self.scope.label(), attempts);
        tracing::info!(
            source = self.source.name(),
            scope = self.scope.label(),
            attempts,
            "Connection established"
        );

        Ok(connection)
    }

    fn reuse(&self, slot: &Slot<S::Connection>) -> Option<Arc<S::Connection>> {
        let existing = slot.get()?;
        tracing::debug!(
            source = self.source.name(),
            scope = self.scope.label(),
            "Reusing established connection"
        );
        Some(existing)
    }

    async fn connect_with_retry(&self) -> Result<(S::Connection, u64), EstablishError<S::Error>> {
        let name = self.source.name();
        let mut budget = RetryBudget::new(self.policy.required, self.policy.retries);
        let mut attempts = 0u64;

        loop {
            attempts += 1;
            self.counters.record_attempt();
            metrics::record_attempt(name);

            let error = match self.source.connect().await {
                Ok(connection) => return Ok((connection, attempts)),
                Err(error) => error,
            };

            self.counters.record_failure();
            metrics::record_failure(name);
            tracing::error!(source = name, attempt = attempts, error = %error, "Connection attempt failed");
            tracing::debug!(source = name, attempt = attempts, "{}", report(&error));

            match budget.on_failure() {
                Decision::Retry => {
                    tracing::debug!(source = name, remaining = budget.remaining(), "Retrying immediately");
                }
                Decision::Exhausted => {
                    if self.policy.exhaustion == Exhaustion::Fail {
                        return Err(EstablishError::Exhausted { attempts, last: error });
                    }
                    let fallback_ms =
                        u64::try_from(self.policy.fallback.as_millis()).unwrap_or(u64::MAX);
                    tracing::warn!(
                        source = name,
                        retries = self.policy.retries,
                        fallback_ms,
                        "Retries exhausted, backing off between attempts"
                    );
                    self.backoff(name).await;
                }
                Decision::Backoff => self.backoff(name).await,
            }
        }
    }

    async fn backoff(&self, name: &'static str) {
        self.counters.record_sleep();
        metrics::record_backoff(name);
        tokio::time::sleep(self.policy.fallback).await;
    }
}
