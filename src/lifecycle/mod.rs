//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Parse keys → Build wallets → Prompt → Chain check → Resolve token → Distribute → Summary
//! ```
//!
//! # Design Decisions
//! - Ordered startup: credentials first, then parameters, then the network
//! - The process exits once the report is logged; there is no daemon mode

pub mod startup;

pub use startup::run_distribution;
