//! Chain-specific types and error definitions.

use alloy::primitives::{Address, U256};
use thiserror::Error;

pub use crate::config::schema::NetworkConfig;

/// Chain ID type for strong typing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChainId(pub u64);

impl From<u64> for ChainId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl From<ChainId> for u64 {
    fn from(id: ChainId) -> Self {
        id.0
    }
}

/// Errors that can occur during blockchain operations.
#[derive(Debug, Error)]
pub enum BlockchainError {
    /// RPC connection or request failed.
    #[error("RPC error: {0}")]
    Rpc(String),

    /// RPC request timed out.
    #[error("RPC timeout after {0} seconds")]
    Timeout(u64),

    /// Transaction was not confirmed within expected time.
    #[error("Transaction not confirmed within {0} seconds")]
    ConfirmationTimeout(u64),

    /// Contract call failed or returned undecodable data.
    #[error("Contract error: {0}")]
    Contract(String),

    /// Transaction could not be signed or broadcast.
    #[error("Transaction failed: {0}")]
    Transaction(String),

    /// Invalid private key format.
    #[error("Wallet error: {0}")]
    Wallet(String),

    /// A human-readable amount could not be converted to base units.
    #[error("Invalid amount: {0}")]
    Amount(String),

    /// Chain configuration mismatch.
    #[error("Chain ID mismatch: expected {expected}, got {actual}")]
    ChainMismatch { expected: u64, actual: u64 },
}

/// Result type for blockchain operations.
pub type BlockchainResult<T> = Result<T, BlockchainError>;

/// Gas parameters attached to a transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GasSettings {
    /// Gas limit ceiling.
    pub gas_limit: u64,
    /// Legacy gas price in wei.
    pub gas_price: u128,
}

/// A single token transfer, minus the signing wallet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransferRequest {
    /// Token contract address.
    pub token: Address,
    /// Recipient of the tokens.
    pub destination: Address,
    /// Amount in the token's base units.
    pub amount: U256,
}

/// Final state of a submitted transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmationStatus {
    /// Transaction is confirmed with required block depth.
    Confirmed { block_number: u64 },
    /// Transaction was mined but reverted.
    Failed(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chain_id_conversion() {
        let chain_id = ChainId::from(93384u64);
        assert_eq!(chain_id.0, 93384);
        assert_eq!(u64::from(chain_id), 93384);
    }

    #[test]
    fn test_error_display() {
        let err = BlockchainError::Timeout(10);
        assert_eq!(err.to_string(), "RPC timeout after 10 seconds");

        let err = BlockchainError::ChainMismatch {
            expected: 93384,
            actual: 1,
        };
        assert!(err.to_string().contains("93384"));
    }

    #[test]
    fn test_confirmation_status() {
        let status = ConfirmationStatus::Confirmed { block_number: 100 };
        assert!(matches!(status, ConfirmationStatus::Confirmed { .. }));
        assert_ne!(status, ConfirmationStatus::Failed("reverted".into()));
    }
}
