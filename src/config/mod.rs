//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → SourcesConfig (validated, immutable)
//!     → policy_for(name) → EstablishPolicy
//! ```
//!
//! # Design Decisions
//! - All fields have defaults to allow minimal configs
//! - Per-source sections override only the fields they name
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, parse_config, ConfigError};
pub use schema::{LoggingConfig, PolicyConfig, PolicyOverride, SourcesConfig};
pub use validation::{validate_config, ValidationError};
