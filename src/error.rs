//! Top-level errors that end a run with a failure exit status.

use thiserror::Error;

use crate::blockchain::types::BlockchainError;
use crate::config::credentials::{CredentialError, CREDENTIALS_FORMAT_HINT};
use crate::config::loader::ConfigError;
use crate::params::ParameterError;

/// Fatal errors. Anything that only affects one wallet or one transfer is
/// recorded in the distribution report instead.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Credentials(#[from] CredentialError),

    #[error("No private keys found in environment variables.")]
    NoPrivateKeys,

    #[error("No valid private keys could be loaded")]
    NoUsableWallets,

    #[error(transparent)]
    Parameters(#[from] ParameterError),

    #[error("Failed to read token decimals: {0}")]
    Decimals(#[source] BlockchainError),

    #[error("Failed to convert amount: {0}")]
    Amount(#[source] BlockchainError),

    #[error("Failed to initialize RPC client: {0}")]
    Client(#[source] BlockchainError),
}

impl AppError {
    /// Operator guidance printed after the error, if any.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            AppError::Credentials(_) | AppError::NoPrivateKeys => Some(CREDENTIALS_FORMAT_HINT),
            _ => None,
        }
    }
}
