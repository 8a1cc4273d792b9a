//! Operator parameter collection.
//!
//! # Data Flow
//! ```text
//! ParameterSource (terminal prompts, or fixed answers in tests)
//!     → token address  → validation.rs → Address
//!     → amount         → validation.rs → decimal string
//!     → count          → validation.rs → u32
//!     → TransferParameters
//! ```
//!
//! # Design Decisions
//! - Each answer is validated as soon as it is read
//! - The first invalid answer ends collection; there is no re-prompt

pub mod prompt;
pub mod validation;

use alloy::primitives::Address;
use thiserror::Error;

pub use prompt::StdinSource;
pub use validation::{validate_amount, validate_destination_count, validate_token_address};

/// The three questions asked before a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prompt {
    TokenAddress,
    Amount,
    DestinationCount,
}

impl Prompt {
    /// Text shown to the operator.
    pub fn text(&self) -> &'static str {
        match self {
            Prompt::TokenAddress => "Enter the ERC20 token contract address: ",
            Prompt::Amount => "How much tokens do you want to send: ",
            Prompt::DestinationCount => "How many addresses do you want to send to: ",
        }
    }
}

/// Something that can answer a [`Prompt`].
pub trait ParameterSource {
    /// Return the raw answer to `prompt`.
    fn read(&mut self, prompt: Prompt) -> std::io::Result<String>;
}

/// Errors raised while collecting operator parameters.
#[derive(Debug, Error)]
pub enum ParameterError {
    #[error("Invalid token address provided: '{0}'")]
    InvalidTokenAddress(String),

    #[error("Invalid amount provided: '{0}'")]
    InvalidAmount(String),

    #[error("Invalid number of addresses provided: '{0}'")]
    InvalidDestinationCount(String),

    #[error("Failed to read input: {0}")]
    Input(#[from] std::io::Error),
}

/// Validated answers to every prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferParameters {
    /// Token contract to distribute.
    pub token_address: Address,
    /// Amount per destination, in human units.
    pub amount: String,
    /// Destinations per wallet.
    pub destination_count: u32,
}

/// Ask every prompt in order, validating each answer before the next.
pub fn collect_parameters<S>(source: &mut S) -> Result<TransferParameters, ParameterError>
where
    S: ParameterSource + ?Sized,
{
    let token_address = validate_token_address(&source.read(Prompt::TokenAddress)?)?;
    let amount = validate_amount(&source.read(Prompt::Amount)?)?;
    let destination_count = validate_destination_count(&source.read(Prompt::DestinationCount)?)?;

    tracing::debug!(
        token = %token_address,
        amount = %amount,
        destination_count,
        "Parameters collected"
    );

    Ok(TransferParameters {
        token_address,
        amount,
        destination_count,
    })
}
