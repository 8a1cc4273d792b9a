//! Fixed pauses between submissions.
//!
//! The endpoint is protected by a constant delay only; there is no adaptive
//! backoff.

use std::time::Duration;

use async_trait::async_trait;

use crate::config::TransferConfig;

/// Where in the run a pause falls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gap {
    /// Between two transfers from the same wallet.
    BetweenTransfers,
    /// Between two wallets.
    BetweenWallets,
}

/// Decides how long the distributor waits at each [`Gap`].
#[async_trait]
pub trait Pacer: Send + Sync {
    async fn pause(&self, gap: Gap);
}

/// Sleeps a configured, constant duration per gap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedDelay {
    pub between_transfers: Duration,
    pub between_wallets: Duration,
}

impl FixedDelay {
    /// The delay for `gap`.
    pub fn duration(&self, gap: Gap) -> Duration {
        match gap {
            Gap::BetweenTransfers => self.between_transfers,
            Gap::BetweenWallets => self.between_wallets,
        }
    }
}

impl From<&TransferConfig> for FixedDelay {
    fn from(config: &TransferConfig) -> Self {
        Self {
            between_transfers: Duration::from_millis(config.delay_between_transfers_ms),
            between_wallets: Duration::from_millis(config.delay_between_wallets_ms),
        }
    }
}

#[async_trait]
impl Pacer for FixedDelay {
    async fn pause(&self, gap: Gap) {
        let delay = self.duration(gap);
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }
}
