//! Validation utilities.

use gost_config::Config;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Errors on environment variables:\n{}", errors)]
    EnvVarsError { errors: String },
}

fn validate_env_vars(config: &Config) -> Result<(), ValidationError> {
    #[inline]
    fn _missing(error: &mut String, name: &str) {
        error.push_str(&format!("\n  - Missing env. var.: {name}"));
    }

    #[inline]
    fn _invalid(error: &mut String, name: &str) {
        error.push_str(&format!("\n  - Invalid env. var.: {name}"));
    }

    let mut error = String::new();

    if config.api.token.is_empty() {
        _missing(&mut error, "GOST_API_TOKEN");
    }
    if config.api.root_url.is_empty() {
        _missing(&mut error, "GOST_API_ROOT_URL");
    }
    if config.api.connect_timeout == 0 {
        _invalid(&mut error, "GOST_API_CONNECT_TIMEOUT");
    }

    if error.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::EnvVarsError { errors: error })
    }
}

/// Validate configuration.
pub fn validate_configuration(config: &Config) -> Result<(), ValidationError> {
    validate_env_vars(config)
}
