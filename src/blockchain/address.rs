//! Disposable destination addresses.

use alloy::primitives::Address;
use alloy::signers::local::PrivateKeySigner;

/// Generate a fresh, random destination address.
///
/// The key behind the address is dropped immediately, nothing is recorded,
/// and successive calls are independent.
pub fn generate_address() -> Address {
    PrivateKeySigner::random().address()
}
