//! Built-in administrator credentials and their environment override.

use std::env;

use crate::domain::player::is_well_formed_api_key;
use crate::errors::domain::{ConfigIssue, DomainError};

/// Default api key for the built-in admin record. Well known so example
/// clients work out of the box; deployments override it via
/// `WHISPER_ADMIN_API_KEY`.
pub const DEFAULT_ADMIN_API_KEY: &str = "GVTu6CaxvzHQWFAn6eMi8TfVVq2BcK";

/// Environment variable overriding the admin api key.
pub const ADMIN_API_KEY_ENV: &str = "WHISPER_ADMIN_API_KEY";

/// Resolve the admin api key: the override when set (and valid), otherwise
/// the built-in default.
pub fn admin_api_key() -> Result<String, DomainError> {
    match env::var(ADMIN_API_KEY_ENV) {
        Ok(value) => {
            validate_admin_key(&value)?;
            Ok(value)
        }
        Err(env::VarError::NotPresent) => Ok(DEFAULT_ADMIN_API_KEY.to_string()),
        Err(env::VarError::NotUnicode(_)) => Err(DomainError::invalid_config(
            ConfigIssue::BadApiKey,
            format!("{ADMIN_API_KEY_ENV} is not valid UTF-8"),
        )),
    }
}

/// An admin key override must look like any other api key.
pub fn validate_admin_key(key: &str) -> Result<(), DomainError> {
    if !is_well_formed_api_key(key) {
        return Err(DomainError::invalid_config(
            ConfigIssue::BadApiKey,
            format!("{ADMIN_API_KEY_ENV} must be a non-empty alphanumeric string"),
        ));
    }
    Ok(())
}
