//! Blockchain RPC client with timeout and error handling.
//!
//! # Responsibilities
//! - Connect to the JSON-RPC endpoint
//! - Query chain state (chain id, block number, receipts, gas price)
//! - Read token decimals and balances
//! - Sign and broadcast token transfers
//! - Bound every call with the configured timeout

use std::future::IntoFuture;
use std::time::Duration;

use alloy::primitives::{Address, TxHash, U256};
use alloy::providers::{DynProvider, Provider, ProviderBuilder};
use alloy::rpc::types::TransactionReceipt;
use async_trait::async_trait;
use tokio::time::timeout;

use crate::blockchain::erc20::IERC20;
use crate::blockchain::network::TokenNetwork;
use crate::blockchain::transaction::{self, ConfirmationPolicy};
use crate::blockchain::types::{
    BlockchainError, BlockchainResult, ChainId, ConfirmationStatus, GasSettings, NetworkConfig,
    TransferRequest,
};
use crate::blockchain::wallet::Wallet;

/// Blockchain RPC client bound to a single endpoint.
#[derive(Clone)]
pub struct BlockchainClient {
    /// Read-only provider shared by every query.
    provider: DynProvider,
    /// Parsed endpoint, reused to build per-wallet signing providers.
    rpc_url: url::Url,
    /// Configuration.
    config: NetworkConfig,
    /// How long to wait for transfers to confirm.
    confirmation: ConfirmationPolicy,
    /// Request timeout duration.
    timeout_duration: Duration,
}

impl BlockchainClient {
    /// Create a new blockchain client.
    ///
    /// No request is made; use [`verify_chain_id`](Self::verify_chain_id) to
    /// check the endpoint.
    pub fn new(config: NetworkConfig, confirmation: ConfirmationPolicy) -> BlockchainResult<Self> {
        let rpc_url: url::Url = config.rpc_url.parse().map_err(|e| {
            BlockchainError::Rpc(format!("Invalid RPC URL '{}': {}", config.rpc_url, e))
        })?;

        let provider = ProviderBuilder::new().connect_http(rpc_url.clone()).erased();

        tracing::info!(
            rpc_url = %config.rpc_url,
            chain_id = config.chain_id,
            "Blockchain client initialized"
        );

        Ok(Self {
            provider,
            rpc_url,
            timeout_duration: Duration::from_secs(config.rpc_timeout_secs),
            config,
            confirmation,
        })
    }

    /// Verify the connected chain ID matches configuration.
    pub async fn verify_chain_id(&self) -> BlockchainResult<()> {
        let chain_id = self.get_chain_id().await?;
        if chain_id.0 != self.config.chain_id {
            return Err(BlockchainError::ChainMismatch {
                expected: self.config.chain_id,
                actual: chain_id.0,
            });
        }
        Ok(())
    }

    /// Get the chain ID from the RPC.
    pub async fn get_chain_id(&self) -> BlockchainResult<ChainId> {
        self.call(BlockchainError::Rpc, "eth_chainId", self.provider.get_chain_id())
            .await
            .map(ChainId)
    }

    /// Get the latest block number.
    pub async fn get_block_number(&self) -> BlockchainResult<u64> {
        self.call(BlockchainError::Rpc, "eth_blockNumber", self.provider.get_block_number())
            .await
    }

    /// Get a transaction receipt by hash.
    pub async fn get_transaction_receipt(
        &self,
        tx_hash: TxHash,
    ) -> BlockchainResult<Option<TransactionReceipt>> {
        self.call(
            BlockchainError::Rpc,
            "eth_getTransactionReceipt",
            self.provider.get_transaction_receipt(tx_hash),
        )
        .await
    }

    /// Get the configuration.
    pub fn config(&self) -> &NetworkConfig {
        &self.config
    }

    /// Run one RPC call under the client timeout.
    async fn call<T, E, F>(
        &self,
        map_err: fn(String) -> BlockchainError,
        op: &'static str,
        fut: F,
    ) -> BlockchainResult<T>
    where
        F: IntoFuture<Output = Result<T, E>>,
        E: std::fmt::Display,
    {
        match timeout(self.timeout_duration, fut).await {
            Ok(Ok(result)) => Ok(result),
            Ok(Err(e)) => {
                tracing::warn!(op, error = %e, "RPC error");
                Err(map_err(format!("{}: {}", op, e)))
            }
            Err(_) => {
                tracing::warn!(op, "RPC timeout");
                Err(BlockchainError::Timeout(self.config.rpc_timeout_secs))
            }
        }
    }
}

#[async_trait]
impl TokenNetwork for BlockchainClient {
    async fn check_chain(&self) -> BlockchainResult<()> {
        self.verify_chain_id().await
    }

    async fn token_decimals(&self, token: Address) -> BlockchainResult<u8> {
        let contract = IERC20::new(token, self.provider.clone());
        self.call(BlockchainError::Contract, "decimals", contract.decimals().call())
            .await
    }

    async fn token_balance(&self, token: Address, owner: Address) -> BlockchainResult<U256> {
        let contract = IERC20::new(token, self.provider.clone());
        self.call(BlockchainError::Contract, "balanceOf", contract.balanceOf(owner).call())
            .await
    }

    async fn gas_price(&self) -> BlockchainResult<u128> {
        self.call(BlockchainError::Rpc, "eth_gasPrice", self.provider.get_gas_price())
            .await
    }

    async fn submit_transfer(
        &self,
        wallet: &Wallet,
        request: &TransferRequest,
        gas: GasSettings,
    ) -> BlockchainResult<TxHash> {
        let signing_provider = ProviderBuilder::new()
            .wallet(wallet.ethereum_wallet())
            .connect_http(self.rpc_url.clone());

        let tx = transaction::build_transfer(wallet, request, gas);
        let pending = self
            .call(
                BlockchainError::Transaction,
                "eth_sendRawTransaction",
                signing_provider.send_transaction(tx),
            )
            .await?;

        Ok(*pending.tx_hash())
    }

    async fn wait_for_confirmation(&self, tx_hash: TxHash) -> BlockchainResult<ConfirmationStatus> {
        transaction::wait_for_confirmation(self, tx_hash, &self.confirmation).await
    }
}

impl std::fmt::Debug for BlockchainClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BlockchainClient")
            .field("rpc_url", &self.config.rpc_url)
            .field("chain_id", &self.config.chain_id)
            .field("timeout_secs", &self.config.rpc_timeout_secs)
            .finish()
    }
}
