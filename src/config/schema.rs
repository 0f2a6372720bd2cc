//! Configuration schema definitions.
//!
//! ```toml
//! [defaults]
//! retries = 5
//! fallback_secs = 10
//!
//! [sources.primary]
//! required = true
//!
//! [sources.cache]
//! global = false
//! exhaustion = "fail"
//!
//! [logging]
//! level = "debug"
//! ```

use std::collections::BTreeMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::establish::{EstablishPolicy, Exhaustion};

/// Root configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct SourcesConfig {
    /// Policy applied to every source without an override.
    pub defaults: PolicyConfig,

    /// Per-source overrides keyed by source name.
    pub sources: BTreeMap<String, PolicyOverride>,

    pub logging: LoggingConfig,
}

impl SourcesConfig {
    /// Effective policy settings for `name`: defaults with its override applied.
    pub fn settings_for(&self, name: &str) -> PolicyConfig {
        match self.sources.get(name) {
            Some(over) => over.apply(&self.defaults),
            None => self.defaults.clone(),
        }
    }

    /// Effective establishment policy for `name`.
    pub fn policy_for(&self, name: &str) -> EstablishPolicy {
        EstablishPolicy::from(&self.settings_for(name))
    }
}

/// Establishment policy as written in config files.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct PolicyConfig {
    /// Retry forever without consuming the budget.
    pub required: bool,

    /// Immediate retries before backoff begins.
    pub retries: u32,

    /// Backoff interval in seconds.
    pub fallback_secs: u64,

    /// Share the connection process-wide.
    pub global: bool,

    /// Behaviour once retries run out ("retry" or "fail").
    pub exhaustion: Exhaustion,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            required: false,
            retries: 10,
            fallback_secs: 30,
            global: true,
            exhaustion: Exhaustion::Retry,
        }
    }
}

impl From<&PolicyConfig> for EstablishPolicy {
    fn from(config: &PolicyConfig) -> Self {
        Self {
            required: config.required,
            retries: config.retries,
            fallback: Duration::from_secs(config.fallback_secs),
            global: config.global,
            exhaustion: config.exhaustion,
        }
    }
}

/// Per-source override. Unset fields inherit from `[defaults]`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct PolicyOverride {
    pub required: Option<bool>,
    pub retries: Option<u32>,
    pub fallback_secs: Option<u64>,
    pub global: Option<bool>,
    pub exhaustion: Option<Exhaustion>,
}

impl PolicyOverride {
    pub fn apply(&self, base: &PolicyConfig) -> PolicyConfig {
        PolicyConfig {
            required: self.required.unwrap_or(base.required),
            retries: self.retries.unwrap_or(base.retries),
            fallback_secs: self.fallback_secs.unwrap_or(base.fallback_secs),
            global: self.global.unwrap_or(base.global),
            exhaustion: self.exhaustion.unwrap_or(base.exhaustion),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error, off). `RUST_LOG` wins when set.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}
