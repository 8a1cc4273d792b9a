//! Token distribution subsystem.
//!
//! # Data Flow
//! ```text
//! wallets (credential order)
//!     → orchestrator.rs: balanceOf → skip if short
//!                        gas price (once per wallet)
//!                        K × { fresh address → transfer → confirm → pause }
//!                        pause between wallets
//!     → report.rs (explicit outcome per wallet and per transfer)
//! ```
//!
//! # Design Decisions
//! - Strictly sequential: one network call in flight at a time
//! - Wallet and transfer failures are values, never early returns
//! - Pauses go through `Pacer` so tests run without sleeping

pub mod orchestrator;
pub mod pacing;
pub mod report;

pub use orchestrator::{DistributionPlan, Distributor};
pub use pacing::{FixedDelay, Gap, Pacer};
pub use report::{DistributionReport, TransferOutcome, WalletOutcome, WalletReport};
