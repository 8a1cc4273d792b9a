//! Per-transfer and per-wallet outcomes of a run.

use alloy::primitives::{Address, TxHash, U256};

/// What happened to a single transfer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransferOutcome {
    /// Mined with the required confirmations.
    Confirmed {
        destination: Address,
        tx_hash: TxHash,
        block_number: u64,
    },
    /// Rejected at submission, reverted, or never confirmed.
    Failed {
        destination: Address,
        /// Set when the node accepted the transaction.
        tx_hash: Option<TxHash>,
        reason: String,
    },
}

impl TransferOutcome {
    pub fn destination(&self) -> Address {
        match self {
            TransferOutcome::Confirmed { destination, .. }
            | TransferOutcome::Failed { destination, .. } => *destination,
        }
    }

    pub fn is_confirmed(&self) -> bool {
        matches!(self, TransferOutcome::Confirmed { .. })
    }

    /// Whether the node accepted the transaction.
    pub fn was_submitted(&self) -> bool {
        match self {
            TransferOutcome::Confirmed { .. } => true,
            TransferOutcome::Failed { tx_hash, .. } => tx_hash.is_some(),
        }
    }
}

/// What happened to a single sender wallet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WalletOutcome {
    /// Balance was sufficient and every destination was attempted.
    Processed {
        balance: U256,
        transfers: Vec<TransferOutcome>,
    },
    /// Balance was below the per-transfer amount; nothing was sent.
    InsufficientBalance { balance: U256, required: U256 },
    /// A wallet-level query failed; remaining work for it was abandoned.
    Failed { reason: String },
}

/// Outcome for one wallet, keyed by its address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalletReport {
    pub address: Address,
    pub outcome: WalletOutcome,
}

impl WalletReport {
    pub fn transfers(&self) -> &[TransferOutcome] {
        match &self.outcome {
            WalletOutcome::Processed { transfers, .. } => transfers,
            _ => &[],
        }
    }
}

/// Every wallet's outcome, in processing order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DistributionReport {
    pub wallets: Vec<WalletReport>,
}

impl DistributionReport {
    /// Iterate over every transfer attempt across all wallets.
    pub fn transfers(&self) -> impl Iterator<Item = &TransferOutcome> {
        self.wallets.iter().flat_map(|w| w.transfers())
    }

    pub fn attempted(&self) -> usize {
        self.transfers().count()
    }

    pub fn submitted(&self) -> usize {
        self.transfers().filter(|t| t.was_submitted()).count()
    }

    pub fn confirmed(&self) -> usize {
        self.transfers().filter(|t| t.is_confirmed()).count()
    }

    pub fn failed(&self) -> usize {
        self.transfers().filter(|t| !t.is_confirmed()).count()
    }

    pub fn skipped_wallets(&self) -> usize {
        self.wallets
            .iter()
            .filter(|w| matches!(w.outcome, WalletOutcome::InsufficientBalance { .. }))
            .count()
    }

    pub fn failed_wallets(&self) -> usize {
        self.wallets
            .iter()
            .filter(|w| matches!(w.outcome, WalletOutcome::Failed { .. }))
            .count()
    }

    /// Emit a one-line summary of the run.
    pub fn log_summary(&self) {
        tracing::info!(
            wallets = self.wallets.len(),
            skipped_wallets = self.skipped_wallets(),
            failed_wallets = self.failed_wallets(),
            attempted = self.attempted(),
            submitted = self.submitted(),
            confirmed = self.confirmed(),
            failed = self.failed(),
            "Distribution finished"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn confirmed(n: u8) -> TransferOutcome {
        TransferOutcome::Confirmed {
            destination: Address::repeat_byte(n),
            tx_hash: TxHash::repeat_byte(n),
            block_number: 1,
        }
    }

    #[test]
    fn test_counters() {
        let report = DistributionReport {
            wallets: vec![
                WalletReport {
                    address: Address::repeat_byte(0xa1),
                    outcome: WalletOutcome::Processed {
                        balance: U256::from(10u64),
                        transfers: vec![
                            confirmed(1),
                            TransferOutcome::Failed {
                                destination: Address::repeat_byte(2),
                                tx_hash: None,
                                reason: "nonce too low".into(),
                            },
                            TransferOutcome::Failed {
                                destination: Address::repeat_byte(3),
                                tx_hash: Some(TxHash::repeat_byte(3)),
                                reason: "Transaction reverted".into(),
                            },
                        ],
                    },
                },
                WalletReport {
                    address: Address::repeat_byte(0xa2),
                    outcome: WalletOutcome::InsufficientBalance {
                        balance: U256::ZERO,
                        required: U256::from(1u64),
                    },
                },
                WalletReport {
                    address: Address::repeat_byte(0xa3),
                    outcome: WalletOutcome::Failed {
                        reason: "RPC timeout after 10 seconds".into(),
                    },
                },
            ],
        };

        assert_eq!(report.attempted(), 3);
        assert_eq!(report.submitted(), 2);
        assert_eq!(report.confirmed(), 1);
        assert_eq!(report.failed(), 2);
        assert_eq!(report.skipped_wallets(), 1);
        assert_eq!(report.failed_wallets(), 1);
        assert!(report.wallets[1].transfers().is_empty());
    }

    #[test]
    fn test_destination_accessor() {
        assert_eq!(confirmed(7).destination(), Address::repeat_byte(7));
    }
}
