//! Sender wallets and the wallet factory.
//!
//! # Security
//! - Keys are never logged or serialized
//! - A rejected key is reported by its position in the list only

use alloy::network::EthereumWallet;
use alloy::primitives::Address;
use alloy::signers::local::PrivateKeySigner;

use crate::blockchain::types::{BlockchainError, BlockchainResult};

/// A funded sender: a private key bound to the configured chain.
#[derive(Clone)]
pub struct Wallet {
    /// The underlying signer (private key).
    signer: PrivateKeySigner,
    /// Chain ID for EIP-155 replay protection.
    chain_id: u64,
}

impl Wallet {
    /// Create a wallet from a hex-encoded private key string.
    ///
    /// # Arguments
    /// * `private_key_hex` - Hex string (with or without 0x prefix, surrounding
    ///   whitespace ignored)
    /// * `chain_id` - Chain ID for transaction signing
    pub fn from_private_key(private_key_hex: &str, chain_id: u64) -> BlockchainResult<Self> {
        let trimmed = private_key_hex.trim();
        let key_hex = trimmed.strip_prefix("0x").unwrap_or(trimmed);

        let signer: PrivateKeySigner = key_hex
            .parse()
            .map_err(|e| BlockchainError::Wallet(format!("Invalid private key format: {}", e)))?;

        Ok(Self { signer, chain_id })
    }

    /// Get the wallet's address.
    pub fn address(&self) -> Address {
        self.signer.address()
    }

    /// Get the chain ID this wallet is configured for.
    pub fn chain_id(&self) -> u64 {
        self.chain_id
    }

    /// Signing handle for a provider's wallet filler.
    pub fn ethereum_wallet(&self) -> EthereumWallet {
        EthereumWallet::from(self.signer.clone())
    }
}

impl std::fmt::Debug for Wallet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Wallet")
            .field("address", &self.address())
            .field("chain_id", &self.chain_id)
            .finish()
    }
}

/// A key that could not be turned into a wallet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyRejection {
    /// Zero-based position of the key in the configured list.
    pub index: usize,
    /// Why the key was rejected.
    pub reason: String,
}

/// Result of building wallets from a key list.
#[derive(Debug, Default)]
pub struct WalletSet {
    /// Usable wallets, in key order.
    pub wallets: Vec<Wallet>,
    /// Keys that were skipped.
    pub rejected: Vec<KeyRejection>,
}

/// Build one wallet per valid key; invalid keys are logged and skipped.
pub fn build_wallets(keys: &[String], chain_id: u64) -> WalletSet {
    let mut set = WalletSet::default();

    for (index, key) in keys.iter().enumerate() {
        match Wallet::from_private_key(key, chain_id) {
            Ok(wallet) => {
                tracing::debug!(index, address = %wallet.address(), "Wallet initialized");
                set.wallets.push(wallet);
            }
            Err(e) => {
                tracing::error!(index, error = %e, "Invalid private key, skipping");
                set.rejected.push(KeyRejection {
                    index,
                    reason: e.to_string(),
                });
            }
        }
    }

    set
}
