//! Blockchain integration subsystem.
//!
//! # Data Flow
//! ```text
//! Environment (JSON array of private keys)
//!     → wallet.rs (key parsing, one signer per key)
//!     → client.rs (RPC connection with timeouts)
//!     → erc20.rs (decimals, balanceOf, unit conversion)
//!     → transaction.rs (build transfer, confirm)
//! address.rs supplies disposable destinations.
//! ```
//!
//! # Security Constraints
//! - Private keys ONLY from the environment
//! - Never log private keys or sensitive data
//! - All RPC calls have configurable timeouts

pub mod address;
pub mod client;
pub mod erc20;
pub mod network;
pub mod transaction;
pub mod types;
pub mod wallet;

pub use client::BlockchainClient;
pub use erc20::TokenHandle;
pub use network::TokenNetwork;
pub use types::{BlockchainError, ChainId, ConfirmationStatus, GasSettings, TransferRequest};
pub use wallet::{build_wallets, KeyRejection, Wallet, WalletSet};
