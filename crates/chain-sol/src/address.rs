//! Checks on the account key a Solana wallet hands back.
//!
//! An account is a base58 string of a 32-byte Ed25519 public key.

use crate::error::SolError;

const PUBLIC_KEY_LEN: usize = 32;

/// Decodes an account key to its raw bytes.
pub fn parse_public_key(address: &str) -> Result<[u8; PUBLIC_KEY_LEN], SolError> {
    if address.is_empty() {
        return Err(SolError::InvalidAddress("empty public key".into()));
    }

    let bytes = bs58::decode(address)
        .into_vec()
        .map_err(|e| SolError::InvalidAddress(format!("{address}: {e}")))?;

    bytes.try_into().map_err(|v: Vec<u8>| {
        SolError::InvalidAddress(format!(
            "{address}: expected {PUBLIC_KEY_LEN} bytes, got {}",
            v.len()
        ))
    })
}

/// Fails unless `address` is a well-formed account key.
pub fn validate_address(address: &str) -> Result<(), SolError> {
    parse_public_key(address).map(|_| ())
}
