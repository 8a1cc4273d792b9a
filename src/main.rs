//! Token Scatter
//!
//! Sends a fixed amount of one ERC20 token from every configured wallet to
//! freshly generated addresses, one confirmed transfer at a time.
//!
//! # Architecture Overview
//!
//! ```text
//!   .env / environment ──▶ config::credentials ──▶ blockchain::wallet
//!                                                        │
//!   terminal prompts ────▶ params ──────────────────────┤
//!                                                        ▼
//!                                              lifecycle::startup
//!                                                        │
//!                                                        ▼
//!                         distribution::orchestrator ──▶ blockchain::client ──▶ RPC
//!                                  │
//!                                  ▼
//!                         distribution::report (summary log)
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use token_scatter::blockchain::transaction::ConfirmationPolicy;
use token_scatter::blockchain::BlockchainClient;
use token_scatter::config::loader::load_or_default;
use token_scatter::distribution::FixedDelay;
use token_scatter::error::AppError;
use token_scatter::observability::init_logging;
use token_scatter::params::prompt::StdinSource;
use token_scatter::run_distribution;

#[derive(Parser)]
#[command(name = "token-scatter")]
#[command(about = "Distribute an ERC20 token from many wallets to fresh addresses", long_about = None)]
struct Cli {
    /// Optional TOML config file; built-in defaults are used when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Load environment variables from this file instead of ./.env
    #[arg(long)]
    env_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let dotenv_result = match &cli.env_file {
        Some(path) => dotenv::from_path(path).map(|_| ()),
        None => dotenv::dotenv().map(|_| ()),
    };

    let config = match load_or_default(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", AppError::from(e));
            return ExitCode::FAILURE;
        }
    };

    init_logging(&config.logging);
    tracing::info!("token-scatter v{} starting", env!("CARGO_PKG_VERSION"));

    if let Err(e) = dotenv_result {
        if cli.env_file.is_some() {
            tracing::error!(error = %e, "Failed to load env file");
            return ExitCode::FAILURE;
        }
        tracing::debug!(error = %e, "No .env file loaded");
    }

    tracing::info!(
        rpc_url = %config.network.rpc_url,
        chain_id = config.network.chain_id,
        gas_limit = config.transfer.gas_limit,
        "Configuration loaded"
    );

    let raw_keys = std::env::var(&config.credentials.env_var).ok();

    let client = match BlockchainClient::new(
        config.network.clone(),
        ConfirmationPolicy::from(&config.transfer),
    ) {
        Ok(client) => client,
        Err(e) => return fail(AppError::Client(e)),
    };

    let mut source = StdinSource::terminal();
    let pacer = FixedDelay::from(&config.transfer);

    match run_distribution(&config, raw_keys.as_deref(), &mut source, &client, &pacer).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => fail(e),
    }
}

fn fail(error: AppError) -> ExitCode {
    tracing::error!(error = %error, "Distribution aborted");
    if let Some(hint) = error.hint() {
        eprintln!("Expected format: {hint}");
    }
    ExitCode::FAILURE
}
