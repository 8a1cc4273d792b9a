//! Operator input validation.
//!
//! Each check is a pure function from the raw prompt answer to the value the
//! rest of the run uses.

use alloy::primitives::Address;

use crate::params::ParameterError;

/// Accept a well-formed chain address.
///
/// The lower-case `0x` prefix is optional. All-lowercase or all-uppercase hex is taken
/// as-is; mixed case must carry a valid EIP-55 checksum.
pub fn validate_token_address(input: &str) -> Result<Address, ParameterError> {
    let input = input.trim();
    let invalid = || ParameterError::InvalidTokenAddress(input.to_string());

    let hex = input.strip_prefix("0x").unwrap_or(input);
    if hex.len() != 40 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    let address: Address = hex.parse().map_err(|_| invalid())?;

    let has_lower = hex.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = hex.chars().any(|c| c.is_ascii_uppercase());
    if has_lower && has_upper && address.to_checksum(None)[2..] != *hex {
        return Err(invalid());
    }

    Ok(address)
}

/// Accept a strictly positive decimal amount, returned trimmed.
pub fn validate_amount(input: &str) -> Result<String, ParameterError> {
    let input = input.trim();
    let invalid = || ParameterError::InvalidAmount(input.to_string());

    let (whole, fraction) = input.split_once('.').unwrap_or((input, ""));
    let is_digits = |s: &str| s.chars().all(|c| c.is_ascii_digit());
    if (whole.is_empty() && fraction.is_empty()) || !is_digits(whole) || !is_digits(fraction) {
        return Err(invalid());
    }

    if !input.chars().any(|c| matches!(c, '1'..='9')) {
        return Err(invalid());
    }

    Ok(input.to_string())
}

/// Accept a positive integer destination count.
pub fn validate_destination_count(input: &str) -> Result<u32, ParameterError> {
    let input = input.trim();
    match input.parse::<u32>() {
        Ok(count) if count > 0 => Ok(count),
        _ => Err(ParameterError::InvalidDestinationCount(input.to_string())),
    }
}
