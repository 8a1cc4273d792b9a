//! The network operations a distribution run depends on.
//!
//! [`BlockchainClient`](crate::blockchain::BlockchainClient) is the real
//! implementation; tests substitute in-memory doubles.

use alloy::primitives::{Address, TxHash, U256};
use async_trait::async_trait;

use crate::blockchain::types::{BlockchainResult, ConfirmationStatus, GasSettings, TransferRequest};
use crate::blockchain::wallet::Wallet;

/// Token queries and signed transfers against one network endpoint.
#[async_trait]
pub trait TokenNetwork: Send + Sync {
    /// Confirm the endpoint serves the configured chain.
    async fn check_chain(&self) -> BlockchainResult<()>;

    /// `decimals()` of the token contract.
    async fn token_decimals(&self, token: Address) -> BlockchainResult<u8>;

    /// `balanceOf(owner)` on the token contract.
    async fn token_balance(&self, token: Address, owner: Address) -> BlockchainResult<U256>;

    /// Current network gas price in wei.
    async fn gas_price(&self) -> BlockchainResult<u128>;

    /// Sign and broadcast `transfer(destination, amount)` from `wallet`.
    ///
    /// Returns as soon as the node accepts the transaction.
    async fn submit_transfer(
        &self,
        wallet: &Wallet,
        request: &TransferRequest,
        gas: GasSettings,
    ) -> BlockchainResult<TxHash>;

    /// Block until the transaction is mined and has enough confirmations.
    async fn wait_for_confirmation(&self, tx_hash: TxHash) -> BlockchainResult<ConfirmationStatus>;
}
