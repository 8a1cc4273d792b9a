//! Token Scatter Library

pub mod blockchain;
pub mod config;
pub mod distribution;
pub mod error;
pub mod lifecycle;
pub mod observability;
pub mod params;

pub use config::schema::AppConfig;
pub use distribution::{DistributionReport, Distributor};
pub use error::AppError;
pub use lifecycle::run_distribution;
