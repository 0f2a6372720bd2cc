//! Establishment policy.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// What happens once the retry budget runs out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Exhaustion {
    /// Sleep the fallback interval between attempts and never give up.
    #[default]
    Retry,
    /// Return [`EstablishError::Exhausted`](crate::EstablishError::Exhausted).
    /// Has no effect on required sources, which never exhaust.
    Fail,
}

/// How hard to try, how long to wait, and where to keep the result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EstablishPolicy {
    /// Retry forever, backing off after every failure, without consuming `retries`.
    pub required: bool,
    /// Immediate retries before backoff sleeping begins.
    pub retries: u32,
    /// Fixed sleep between attempts once backing off.
    pub fallback: Duration,
    /// Share the connection process-wide instead of owning it.
    pub global: bool,
    pub exhaustion: Exhaustion,
}

impl EstablishPolicy {
    pub fn with_required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn with_retries(mut self, retries: u32) -> Self {
        self.retries = retries;
        self
    }

    pub fn with_fallback(mut self, fallback: Duration) -> Self {
        self.fallback = fallback;
        self
    }

    pub fn with_global(mut self, global: bool) -> Self {
        self.global = global;
        self
    }

    pub fn with_exhaustion(mut self, exhaustion: Exhaustion) -> Self {
        self.exhaustion = exhaustion;
        self
    }
}

impl Default for EstablishPolicy {
    fn default() -> Self {
        Self {
            required: false,
            retries: 10,
            fallback: Duration::from_secs(30),
            global: true,
            exhaustion: Exhaustion::Retry,
        }
    }
}
