//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for a
//! distribution run. All types derive Serde traits for deserialization from
//! an optional TOML file; every field has a default so the tool runs with no
//! file at all.

use serde::{Deserialize, Serialize};

/// Root configuration for a distribution run.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// JSON-RPC endpoint and chain settings.
    pub network: NetworkConfig,

    /// Gas, pacing and confirmation settings for transfers.
    pub transfer: TransferConfig,

    /// Where the sender private keys come from.
    pub credentials: CredentialsConfig,

    /// Console logging settings.
    pub logging: LoggingConfig,
}

/// Network connection configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct NetworkConfig {
    /// JSON-RPC endpoint URL.
    pub rpc_url: String,

    /// Chain ID used for EIP-155 replay protection.
    pub chain_id: u64,

    /// RPC request timeout in seconds.
    pub rpc_timeout_secs: u64,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            rpc_url: "https://assam-rpc.tea.xyz/".to_string(),
            chain_id: 93384,
            rpc_timeout_secs: 10,
        }
    }
}

/// Transfer submission configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TransferConfig {
    /// Gas limit ceiling attached to every token transfer.
    pub gas_limit: u64,

    /// Pause between two transfers from the same wallet, in milliseconds.
    pub delay_between_transfers_ms: u64,

    /// Pause between two wallets, in milliseconds.
    pub delay_between_wallets_ms: u64,

    /// Number of blocks (including the inclusion block) before a transfer
    /// counts as confirmed.
    pub confirmation_blocks: u32,

    /// Maximum time to wait for a transfer to confirm, in seconds.
    pub confirmation_timeout_secs: u64,

    /// Receipt polling interval in milliseconds.
    pub confirmation_poll_ms: u64,
}

impl Default for TransferConfig {
    fn default() -> Self {
        Self {
            gas_limit: 200_000,
            delay_between_transfers_ms: 1000,
            delay_between_wallets_ms: 1000,
            confirmation_blocks: 1,
            confirmation_timeout_secs: 300,
            confirmation_poll_ms: 2000,
        }
    }
}

/// Credential source configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct CredentialsConfig {
    /// Environment variable holding a JSON array of private keys.
    pub env_var: String,
}

impl Default for CredentialsConfig {
    fn default() -> Self {
        Self {
            env_var: "PRIVATE_KEYS".to_string(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter directive when `RUST_LOG` is unset
    /// (trace, debug, info, warn, error, or a full directive).
    pub level: String,

    /// Emit ANSI colours.
    pub ansi: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            ansi: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_reference_network() {
        let config = AppConfig::default();
        assert_eq!(config.network.rpc_url, "https://assam-rpc.tea.xyz/");
        assert_eq!(config.network.chain_id, 93384);
        assert_eq!(config.transfer.gas_limit, 200_000);
        assert_eq!(config.transfer.delay_between_transfers_ms, 1000);
        assert_eq!(config.transfer.delay_between_wallets_ms, 1000);
        assert_eq!(config.credentials.env_var, "PRIVATE_KEYS");
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [transfer]
            delay_between_transfers_ms = 0
            "#,
        )
        .unwrap();

        assert_eq!(config.transfer.delay_between_transfers_ms, 0);
        assert_eq!(config.transfer.delay_between_wallets_ms, 1000);
        assert_eq!(config.network.chain_id, 93384);
    }
}
