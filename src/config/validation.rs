//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0, gas limit > 0)
//! - Check the RPC endpoint is a usable HTTP(S) URL
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: AppConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use thiserror::Error;

use crate::config::schema::AppConfig;

/// A single semantic problem with a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct ValidationError {
    /// Dotted path of the offending field.
    pub field: &'static str,
    /// What is wrong with it.
    pub message: String,
}

impl ValidationError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Validate a parsed configuration.
pub fn validate_config(config: &AppConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    match url::Url::parse(&config.network.rpc_url) {
        Ok(url) if url.scheme() == "http" || url.scheme() == "https" => {}
        Ok(url) => errors.push(ValidationError::new(
            "network.rpc_url",
            format!("unsupported scheme '{}'", url.scheme()),
        )),
        Err(e) => errors.push(ValidationError::new("network.rpc_url", e.to_string())),
    }

    if config.network.chain_id == 0 {
        errors.push(ValidationError::new("network.chain_id", "must be greater than 0"));
    }
    if config.network.rpc_timeout_secs == 0 {
        errors.push(ValidationError::new(
            "network.rpc_timeout_secs",
            "must be greater than 0",
        ));
    }

    let transfer = &config.transfer;
    if transfer.gas_limit == 0 {
        errors.push(ValidationError::new("transfer.gas_limit", "must be greater than 0"));
    }
    if transfer.confirmation_blocks == 0 {
        errors.push(ValidationError::new(
            "transfer.confirmation_blocks",
            "must be at least 1",
        ));
    }
    if transfer.confirmation_timeout_secs == 0 {
        errors.push(ValidationError::new(
            "transfer.confirmation_timeout_secs",
            "must be greater than 0",
        ));
    }
    if transfer.confirmation_poll_ms == 0 {
        errors.push(ValidationError::new(
            "transfer.confirmation_poll_ms",
            "must be greater than 0",
        ));
    }

    if config.credentials.env_var.trim().is_empty() {
        errors.push(ValidationError::new("credentials.env_var", "must not be empty"));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&AppConfig::default()).is_ok());
    }

    #[test]
    fn test_reports_every_error() {
        let mut config = AppConfig::default();
        config.network.rpc_url = "ws://localhost:8546".to_string();
        config.network.chain_id = 0;
        config.transfer.gas_limit = 0;
        config.credentials.env_var = "  ".to_string();

        let errors = validate_config(&config).unwrap_err();
        let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
        assert_eq!(
            fields,
            vec![
                "network.rpc_url",
                "network.chain_id",
                "transfer.gas_limit",
                "credentials.env_var"
            ]
        );
    }

    #[test]
    fn test_zero_delays_are_allowed() {
        let mut config = AppConfig::default();
        config.transfer.delay_between_transfers_ms = 0;
        config.transfer.delay_between_wallets_ms = 0;
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_unparseable_url() {
        let mut config = AppConfig::default();
        config.network.rpc_url = "not a url".to_string();
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "network.rpc_url");
    }
}
