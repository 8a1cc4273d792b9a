//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → logging.rs (structured log events to stdout)
//! ```
//!
//! # Design Decisions
//! - Every submission is logged with sender, destination and tx hash
//! - Balances and amounts are logged in human units

pub mod logging;

pub use logging::init_logging;
