//! Startup orchestration.
//!
//! # Responsibilities
//! - Turn the raw key list into wallets
//! - Collect and validate operator parameters
//! - Check the endpoint's chain id (warning only)
//! - Resolve the token and convert the amount to base units
//! - Hand everything to the distributor
//!
//! # Design Decisions
//! - Fail fast: any error before the first transfer is fatal
//! - Steps run in order, not concurrently
//! - Transfers start last (network writes only once everything checks out)

use crate::blockchain::erc20::TokenHandle;
use crate::blockchain::network::TokenNetwork;
use crate::blockchain::wallet::build_wallets;
use crate::config::credentials::parse_private_keys;
use crate::config::AppConfig;
use crate::distribution::{DistributionPlan, DistributionReport, Distributor, Pacer};
use crate::error::AppError;
use crate::params::{collect_parameters, ParameterSource};

/// Run one complete distribution.
///
/// `raw_keys` is the unparsed value of the credentials variable, or `None`
/// when it is unset.
pub async fn run_distribution<S, N, P>(
    config: &AppConfig,
    raw_keys: Option<&str>,
    source: &mut S,
    network: &N,
    pacer: &P,
) -> Result<DistributionReport, AppError>
where
    S: ParameterSource + ?Sized,
    N: TokenNetwork + ?Sized,
    P: Pacer + ?Sized,
{
    let keys = parse_private_keys(raw_keys)?;
    if keys.is_empty() {
        return Err(AppError::NoPrivateKeys);
    }
    tracing::info!("Found {} private keys", keys.len());

    let wallet_set = build_wallets(&keys, config.network.chain_id);
    drop(keys);
    if wallet_set.wallets.is_empty() {
        return Err(AppError::NoUsableWallets);
    }
    if !wallet_set.rejected.is_empty() {
        tracing::warn!(
            usable = wallet_set.wallets.len(),
            rejected = wallet_set.rejected.len(),
            "Some private keys were skipped"
        );
    }

    let params = collect_parameters(source)?;

    if let Err(e) = network.check_chain().await {
        tracing::warn!(error = %e, "Could not verify chain ID, continuing");
    }

    let token = TokenHandle::resolve(network, params.token_address)
        .await
        .map_err(AppError::Decimals)?;
    let amount = token.to_base_units(&params.amount).map_err(AppError::Amount)?;

    let plan = DistributionPlan {
        token,
        amount,
        destinations_per_wallet: params.destination_count,
        gas_limit: config.transfer.gas_limit,
    };

    let report = Distributor::new(network, pacer)
        .run(&wallet_set.wallets, &plan)
        .await;
    report.log_summary();

    Ok(report)
}
