//! Transfer transaction building and confirmation monitoring.
//!
//! # Responsibilities
//! - Encode `transfer(to, amount)` calls with fixed gas parameters
//! - Poll receipts until the transfer has enough confirmations
//! - Report reverted transfers as failures

use std::time::Duration;

use alloy::network::TransactionBuilder;
use alloy::primitives::TxHash;
use alloy::rpc::types::TransactionRequest;
use alloy::sol_types::SolCall;
use tokio::time::{interval, timeout};

use crate::blockchain::client::BlockchainClient;
use crate::blockchain::erc20::IERC20;
use crate::blockchain::types::{
    BlockchainError, BlockchainResult, ConfirmationStatus, GasSettings, TransferRequest,
};
use crate::blockchain::wallet::Wallet;
use crate::config::TransferConfig;

/// When a submitted transfer counts as confirmed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfirmationPolicy {
    /// Blocks required, counting the inclusion block.
    pub required_blocks: u32,
    /// Give up after this long.
    pub timeout: Duration,
    /// Receipt polling interval.
    pub poll_interval: Duration,
}

impl From<&TransferConfig> for ConfirmationPolicy {
    fn from(config: &TransferConfig) -> Self {
        Self {
            required_blocks: config.confirmation_blocks,
            timeout: Duration::from_secs(config.confirmation_timeout_secs),
            poll_interval: Duration::from_millis(config.confirmation_poll_ms),
        }
    }
}

/// Build the token transfer transaction for `wallet`.
///
/// Nonce is left for the provider to fill.
pub fn build_transfer(wallet: &Wallet, request: &TransferRequest, gas: GasSettings) -> TransactionRequest {
    let call = IERC20::transferCall {
        to: request.destination,
        amount: request.amount,
    };

    TransactionRequest::default()
        .with_from(wallet.address())
        .with_to(request.token)
        .with_input(call.abi_encode())
        .with_gas_limit(gas.gas_limit)
        .with_gas_price(gas.gas_price)
        .with_chain_id(wallet.chain_id())
}

/// Confirmations a receipt in `tx_block` has when the head is `current_block`.
pub fn confirmations(tx_block: u64, current_block: u64) -> u32 {
    let depth = current_block.saturating_sub(tx_block).saturating_add(1);
    u32::try_from(depth).unwrap_or(u32::MAX)
}

/// Wait for a transaction to be confirmed.
///
/// # Arguments
/// * `client` - Client used for receipt and block queries
/// * `tx_hash` - Transaction hash to monitor
/// * `policy` - Required depth, timeout and poll interval
pub async fn wait_for_confirmation(
    client: &BlockchainClient,
    tx_hash: TxHash,
    policy: &ConfirmationPolicy,
) -> BlockchainResult<ConfirmationStatus> {
    let required_confirmations = policy.required_blocks;

    let result = timeout(policy.timeout, async {
        let mut ticker = interval(policy.poll_interval);

        loop {
            ticker.tick().await;

            let receipt = match client.get_transaction_receipt(tx_hash).await? {
                Some(r) => r,
                None => {
                    tracing::debug!(tx_hash = %tx_hash, "Transaction pending");
                    continue;
                }
            };

            if !receipt.status() {
                return Ok(ConfirmationStatus::Failed(
                    "Transaction reverted".to_string(),
                ));
            }

            let current_block = client.get_block_number().await?;
            let tx_block = receipt.block_number.unwrap_or(current_block);
            let confirmed = confirmations(tx_block, current_block);

            if confirmed >= required_confirmations {
                return Ok(ConfirmationStatus::Confirmed {
                    block_number: tx_block,
                });
            }

            tracing::debug!(
                tx_hash = %tx_hash,
                confirmations = confirmed,
                required = required_confirmations,
                "Waiting for confirmations"
            );
        }
    })
    .await;

    match result {
        Ok(status) => status,
        Err(_) => Err(BlockchainError::ConfirmationTimeout(policy.timeout.as_secs())),
    }
}
