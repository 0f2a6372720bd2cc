//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check every source's effective policy, not just the overrides
//! - Validate the log level
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: SourcesConfig → Result<(), Vec<ValidationError>>

use std::str::FromStr;

use thiserror::Error;
use tracing_subscriber::filter::LevelFilter;

use crate::config::schema::{PolicyConfig, SourcesConfig};
use crate::establish::Exhaustion;

/// A single semantic problem in the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0}: exhaustion = \"fail\" never triggers on a required source")]
    FailOnRequired(String),

    #[error("{0}: fallback_secs must be > 0 when retrying indefinitely")]
    ZeroFallback(String),

    #[error("logging.level '{0}' is not a valid level")]
    InvalidLogLevel(String),

    #[error("source names must not be empty")]
    EmptyName,
}

/// Validate a parsed configuration.
pub fn validate_config(config: &SourcesConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    check_policy("defaults", &config.defaults, &mut errors);

    for name in config.sources.keys() {
        if name.trim().is_empty() {
            errors.push(ValidationError::EmptyName);
            continue;
        }
        check_policy(&format!("sources.{name}"), &config.settings_for(name), &mut errors);
    }

    if LevelFilter::from_str(&config.logging.level).is_err() {
        errors.push(ValidationError::InvalidLogLevel(config.logging.level.clone()));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_policy(section: &str, policy: &PolicyConfig, errors: &mut Vec<ValidationError>) {
    if policy.required && policy.exhaustion == Exhaustion::Fail {
        errors.push(ValidationError::FailOnRequired(section.to_string()));
    }
    // Sources that retry forever would spin without a fallback interval.
    let retries_forever = policy.required || policy.exhaustion == Exhaustion::Retry;
    if retries_forever && policy.fallback_secs == 0 {
        errors.push(ValidationError::ZeroFallback(section.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::PolicyOverride;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&SourcesConfig::default()).is_ok());
    }

    #[test]
    fn test_required_defaults_flag_inheriting_sources() {
        let mut config = SourcesConfig::default();
        config.defaults.required = true;
        config.defaults.exhaustion = Exhaustion::Fail;
        config
            .sources
            .insert("queue".to_string(), PolicyOverride::default());

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![
                ValidationError::FailOnRequired("defaults".to_string()),
                ValidationError::FailOnRequired("sources.queue".to_string()),
            ]
        );
    }

    #[test]
    fn test_override_can_fix_inherited_problem() {
        let mut config = SourcesConfig::default();
        config.sources.insert(
            "db".to_string(),
            PolicyOverride {
                required: Some(true),
                fallback_secs: Some(0),
                ..Default::default()
            },
        );
        assert_eq!(
            validate_config(&config).unwrap_err(),
            vec![ValidationError::ZeroFallback("sources.db".to_string())]
        );

        config.sources.get_mut("db").unwrap().fallback_secs = Some(1);
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_zero_fallback_rejected_unless_failing_on_exhaustion() {
        let mut config = SourcesConfig::default();
        config.defaults.fallback_secs = 0;
        assert_eq!(
            validate_config(&config).unwrap_err(),
            vec![ValidationError::ZeroFallback("defaults".to_string())]
        );

        config.defaults.exhaustion = Exhaustion::Fail;
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_empty_name_and_bad_level() {
        let mut config = SourcesConfig::default();
        config.sources.insert(" ".to_string(), PolicyOverride::default());
        config.logging.level = "verbose".to_string();

        let errors = validate_config(&config).unwrap_err();
        assert!(errors.contains(&ValidationError::EmptyName));
        assert!(errors.contains(&ValidationError::InvalidLogLevel("verbose".to_string())));
    }
}
