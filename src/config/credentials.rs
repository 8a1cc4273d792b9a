//! Sender credential loading.
//!
//! # Security
//! - Private keys come ONLY from the environment (or a `.env` file loaded
//!   into it before startup)
//! - Keys are never logged; only their count is

use thiserror::Error;

/// Example shown to the operator when the key list cannot be read.
pub const CREDENTIALS_FORMAT_HINT: &str = r#"PRIVATE_KEYS=["privatekey1", "privatekey2", ...]"#;

/// Errors raised while reading the private key list.
#[derive(Debug, Error)]
pub enum CredentialError {
    /// The value is present but is not a JSON array of strings.
    #[error("Error parsing private key list: {0}")]
    Malformed(String),
}

/// Parse the raw configuration value into a list of private keys.
///
/// A leading byte-order mark and surrounding whitespace are ignored. An
/// absent or empty value yields an empty list; deciding that an empty list
/// is fatal is up to the caller.
pub fn parse_private_keys(raw: Option<&str>) -> Result<Vec<String>, CredentialError> {
    let raw = match raw {
        Some(raw) if !raw.is_empty() => raw,
        _ => return Ok(Vec::new()),
    };

    let cleaned = raw.trim().trim_start_matches('\u{feff}').trim();

    serde_json::from_str::<Vec<String>>(cleaned)
        .map_err(|e| CredentialError::Malformed(e.to_string()))
}
