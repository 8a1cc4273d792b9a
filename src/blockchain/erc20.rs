//! ERC-20 token contract interface and unit conversion.

use alloy::primitives::{Address, U256};
use alloy::sol;

use crate::blockchain::network::TokenNetwork;
use crate::blockchain::types::{BlockchainError, BlockchainResult};

// The subset of ERC-20 the distributor touches.
sol! {
    #[sol(rpc)]
    interface IERC20 {
        function decimals() external view returns (uint8);
        function balanceOf(address account) external view returns (uint256);
        function transfer(address to, uint256 amount) external returns (bool);
    }
}

/// A token contract at a validated address with its decimals cached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenHandle {
    /// Contract address.
    pub address: Address,
    /// Decimals published by the contract.
    pub decimals: u8,
}

impl TokenHandle {
    /// Query the contract's decimals once and bind them to the address.
    pub async fn resolve<N>(network: &N, address: Address) -> BlockchainResult<Self>
    where
        N: TokenNetwork + ?Sized,
    {
        let decimals = network.token_decimals(address).await?;
        tracing::info!(token = %address, decimals, "Token contract resolved");
        Ok(Self { address, decimals })
    }

    /// Convert a human-readable amount to base units.
    pub fn to_base_units(&self, amount: &str) -> BlockchainResult<U256> {
        parse_amount(amount, self.decimals)
    }

    /// Render a base-unit amount in human units.
    pub fn format(&self, amount: U256) -> String {
        format_amount(amount, self.decimals)
    }
}

/// Parse a human-readable amount to the token's smallest unit.
///
/// # Arguments
/// * `amount` - Amount as a decimal string (e.g., "1.5")
/// * `decimals` - Number of decimals (18 for most tokens, 6 for USDC)
pub fn parse_amount(amount: &str, decimals: u8) -> BlockchainResult<U256> {
    let amount = amount.trim();
    let (whole, fraction) = match amount.split_once('.') {
        Some((whole, fraction)) => (whole, fraction),
        None => (amount, ""),
    };

    let is_digits = |s: &str| s.chars().all(|c| c.is_ascii_digit());
    if (whole.is_empty() && fraction.is_empty()) || !is_digits(whole) || !is_digits(fraction) {
        return Err(BlockchainError::Amount(format!(
            "'{}' is not a decimal number",
            amount
        )));
    }

    if fraction.len() > decimals as usize {
        return Err(BlockchainError::Amount(format!(
            "Too many decimal places (max {})",
            decimals
        )));
    }

    let whole = if whole.is_empty() {
        U256::ZERO
    } else {
        U256::from_str_radix(whole, 10)
            .map_err(|e| BlockchainError::Amount(format!("Invalid whole number: {}", e)))?
    };

    // Pad with zeros to match decimals
    let padded = format!("{:0<width$}", fraction, width = decimals as usize);
    let fraction = if padded.is_empty() {
        U256::ZERO
    } else {
        U256::from_str_radix(&padded, 10)
            .map_err(|e| BlockchainError::Amount(format!("Invalid decimal: {}", e)))?
    };

    let multiplier = U256::from(10u64)
        .checked_pow(U256::from(decimals))
        .ok_or_else(|| BlockchainError::Amount("Amount overflow".to_string()))?;

    whole
        .checked_mul(multiplier)
        .and_then(|w| w.checked_add(fraction))
        .ok_or_else(|| BlockchainError::Amount("Amount overflow".to_string()))
}

/// Format base units to a human-readable amount.
pub fn format_amount(amount: U256, decimals: u8) -> String {
    if amount.is_zero() {
        return "0".to_string();
    }

    // 10^decimals past 77 no longer fits; everything is then fractional.
    let (whole, remainder) = match U256::from(10u64).checked_pow(U256::from(decimals)) {
        Some(divisor) => (amount / divisor, amount % divisor),
        None => (U256::ZERO, amount),
    };

    if remainder.is_zero() {
        whole.to_string()
    } else {
        let decimal_str = format!("{:0>width$}", remainder.to_string(), width = decimals as usize);
        let trimmed = decimal_str.trim_end_matches('0');
        format!("{}.{}", whole, trimmed)
    }
}
