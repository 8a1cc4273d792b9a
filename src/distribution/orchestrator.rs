//! The sequential send loop.

use alloy::primitives::U256;

use crate::blockchain::address::generate_address;
use crate::blockchain::erc20::TokenHandle;
use crate::blockchain::network::TokenNetwork;
use crate::blockchain::types::{ConfirmationStatus, GasSettings, TransferRequest};
use crate::blockchain::wallet::Wallet;
use crate::distribution::pacing::{Gap, Pacer};
use crate::distribution::report::{DistributionReport, TransferOutcome, WalletOutcome, WalletReport};

/// What to send from every wallet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DistributionPlan {
    /// Token being distributed, decimals already resolved.
    pub token: TokenHandle,
    /// Amount per destination, in base units.
    pub amount: U256,
    /// Fresh destinations per wallet.
    pub destinations_per_wallet: u32,
    /// Gas limit ceiling per transfer.
    pub gas_limit: u64,
}

/// Drives wallets through balance check, fee query and transfers, strictly
/// one network call at a time.
pub struct Distributor<'a, N: ?Sized, P: ?Sized> {
    network: &'a N,
    pacer: &'a P,
}

impl<'a, N, P> Distributor<'a, N, P>
where
    N: TokenNetwork + ?Sized,
    P: Pacer + ?Sized,
{
    pub fn new(network: &'a N, pacer: &'a P) -> Self {
        Self { network, pacer }
    }

    /// Process every wallet in order and report what happened.
    ///
    /// Never fails: wallet and transfer errors are recorded in the report.
    pub async fn run(&self, wallets: &[Wallet], plan: &DistributionPlan) -> DistributionReport {
        let mut report = DistributionReport::default();

        tracing::info!(
            wallets = wallets.len(),
            destinations_per_wallet = plan.destinations_per_wallet,
            amount = %plan.token.format(plan.amount),
            token = %plan.token.address,
            "Starting distribution"
        );

        for (i, wallet) in wallets.iter().enumerate() {
            let outcome = self.process_wallet(wallet, plan).await;
            report.wallets.push(WalletReport {
                address: wallet.address(),
                outcome,
            });

            if i + 1 < wallets.len() {
                self.pacer.pause(Gap::BetweenWallets).await;
            }
        }

        report
    }

    async fn process_wallet(&self, wallet: &Wallet, plan: &DistributionPlan) -> WalletOutcome {
        let address = wallet.address();

        let balance = match self.network.token_balance(plan.token.address, address).await {
            Ok(balance) => balance,
            Err(e) => {
                tracing::error!(wallet = %address, error = %e, "Error processing wallet");
                return WalletOutcome::Failed {
                    reason: e.to_string(),
                };
            }
        };
        tracing::info!(
            wallet = %address,
            balance = %plan.token.format(balance),
            "Wallet token balance"
        );

        if balance < plan.amount {
            tracing::warn!(
                wallet = %address,
                balance = %plan.token.format(balance),
                required = %plan.token.format(plan.amount),
                "Insufficient token balance, skipping wallet"
            );
            return WalletOutcome::InsufficientBalance {
                balance,
                required: plan.amount,
            };
        }

        let gas_price = match self.network.gas_price().await {
            Ok(price) => price,
            Err(e) => {
                tracing::error!(wallet = %address, error = %e, "Error processing wallet");
                return WalletOutcome::Failed {
                    reason: e.to_string(),
                };
            }
        };
        let gas = GasSettings {
            gas_limit: plan.gas_limit,
            gas_price,
        };

        let count = plan.destinations_per_wallet;
        let mut transfers = Vec::with_capacity(count as usize);
        for j in 0..count {
            let request = TransferRequest {
                token: plan.token.address,
                destination: generate_address(),
                amount: plan.amount,
            };
            transfers.push(self.send(wallet, &request, gas, plan).await);

            if j + 1 < count {
                self.pacer.pause(Gap::BetweenTransfers).await;
            }
        }

        WalletOutcome::Processed { balance, transfers }
    }

    /// Submit one transfer and wait for it to confirm.
    async fn send(
        &self,
        wallet: &Wallet,
        request: &TransferRequest,
        gas: GasSettings,
        plan: &DistributionPlan,
    ) -> TransferOutcome {
        let from = wallet.address();
        let destination = request.destination;

        let tx_hash = match self.network.submit_transfer(wallet, request, gas).await {
            Ok(hash) => hash,
            Err(e) => {
                tracing::error!(from = %from, to = %destination, error = %e, "Failed to send tokens");
                return TransferOutcome::Failed {
                    destination,
                    tx_hash: None,
                    reason: e.to_string(),
                };
            }
        };
        tracing::info!(
            amount = %plan.token.format(request.amount),
            from = %from,
            to = %destination,
            tx_hash = %tx_hash,
            "Sent tokens"
        );

        match self.network.wait_for_confirmation(tx_hash).await {
            Ok(ConfirmationStatus::Confirmed { block_number }) => {
                tracing::info!(tx_hash = %tx_hash, block_number, "Transaction confirmed");
                TransferOutcome::Confirmed {
                    destination,
                    tx_hash,
                    block_number,
                }
            }
            Ok(ConfirmationStatus::Failed(reason)) => {
                tracing::error!(tx_hash = %tx_hash, to = %destination, reason = %reason, "Transaction failed");
                TransferOutcome::Failed {
                    destination,
                    tx_hash: Some(tx_hash),
                    reason,
                }
            }
            Err(e) => {
                tracing::error!(tx_hash = %tx_hash, to = %destination, error = %e, "Transaction not confirmed");
                TransferOutcome::Failed {
                    destination,
                    tx_hash: Some(tx_hash),
                    reason: e.to_string(),
                }
            }
        }
    }
}
