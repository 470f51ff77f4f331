use sha3::{Digest, Keccak256};

use crate::error::EthError;

/// Strips the `0x` prefix and checks the remainder is 40 hex characters.
fn hex_body(address: &str) -> Result<&str, EthError> {
    let hex_part = address
        .strip_prefix("0x")
        .or_else(|| address.strip_prefix("0X"))
        .ok_or_else(|| EthError::InvalidAddress("address must start with 0x".into()))?;

    if hex_part.len() != 40 {
        return Err(EthError::InvalidAddress(format!(
            "expected 40 hex characters, got {}",
            hex_part.len()
        )));
    }

    if !hex_part.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(EthError::InvalidAddress(
            "address contains non-hex characters".into(),
        ));
    }

    Ok(hex_part)
}

/// Validates an Ethereum address string.
///
/// Checks that the address has the correct format (0x + 40 hex characters).
/// If the address contains mixed case, the EIP-55 checksum is verified and
/// `Ok(false)` is returned on mismatch.
pub fn validate_address(address: &str) -> Result<bool, EthError> {
    let hex_part = hex_body(address)?;

    // All-lowercase or all-uppercase carries no checksum.
    let is_all_lower = hex_part.chars().all(|c| !c.is_ascii_uppercase());
    let is_all_upper = hex_part.chars().all(|c| !c.is_ascii_lowercase());

    if is_all_lower || is_all_upper {
        return Ok(true);
    }

    let checksummed = checksum_address(address)?;
    Ok(checksummed[2..] == *hex_part)
}

/// Applies EIP-55 mixed-case checksum encoding to an Ethereum address.
///
/// Accepts any casing of a 0x-prefixed address and returns the checksummed
/// version.
pub fn checksum_address(address: &str) -> Result<String, EthError> {
    let hex_part = hex_body(address)?.to_lowercase();

    // EIP-55: hash the lowercase hex address (without 0x).
    let hash_hex = hex::encode(Keccak256::digest(hex_part.as_bytes()));

    let mut checksummed = String::with_capacity(42);
    checksummed.push_str("0x");

    for (c, h) in hex_part.chars().zip(hash_hex.chars()) {
        let nibble = h.to_digit(16).unwrap_or(0);
        if c.is_ascii_alphabetic() && nibble >= 8 {
            checksummed.push(c.to_ascii_uppercase());
        } else {
            checksummed.push(c);
        }
    }

    Ok(checksummed)
}

/// Canonical text for an account returned by a provider.
///
/// A well-formed 40-hex address is rewritten in its EIP-55 form, so the same
/// account always produces the same text. Anything else is an opaque
/// identifier and is returned unchanged.
pub fn normalize_address(address: &str) -> String {
    match checksum_address(address) {
        Ok(checksummed) => checksummed,
        Err(e) => {
            log::debug!("Keeping account {} as reported: {}", address, e);
            address.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eip55_checksum_known_addresses() {
        // Test vectors from EIP-55.
        let cases = [
            "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed",
            "0xfB6916095ca1df60bB79Ce92cE3Ea74c37c5d359",
            "0xdbF03B407c01E7cD3CBea99509d93f8DDDC8C6FB",
            "0xD1220A0cf47c7B9Be7A2E6BA89F429762e7b9aDb",
        ];

        for expected in &cases {
            let lower = format!("0x{}", expected[2..].to_lowercase());
            let result = checksum_address(&lower).unwrap();
            assert_eq!(&result, expected, "checksum mismatch for {}", expected);
        }
    }

    #[test]
    fn checksum_uppercase_input() {
        let input = "0x5AAEB6053F3E94C9B9A09F33669435E7EF1BEAED";
        let result = checksum_address(input).unwrap();
        assert_eq!(result, "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed");
    }

    #[test]
    fn validate_valid_checksummed_address() {
        let addr = "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed";
        assert!(validate_address(addr).unwrap());
    }

    #[test]
    fn validate_all_lowercase_address() {
        let addr = "0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaed";
        assert!(validate_address(addr).unwrap());
    }

    #[test]
    fn validate_bad_checksum_returns_false() {
        // Intentionally wrong case on a letter to break checksum.
        let addr = "0x5AAEB6053F3E94C9b9A09f33669435E7Ef1BeAed";
        assert!(!validate_address(addr).unwrap());
    }

    #[test]
    fn validate_short_address_errors() {
        assert!(validate_address("0x5aAeb6053F").is_err());
    }

    #[test]
    fn validate_no_prefix_errors() {
        let addr = "5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed";
        assert!(validate_address(addr).is_err());
    }

    #[test]
    fn validate_non_hex_chars_errors() {
        let addr = "0xGGGGb6053F3E94C9b9A09f33669435E7Ef1BeAed";
        assert!(validate_address(addr).is_err());
    }

    #[test]
    fn normalize_lowercase_to_checksum() {
        let addr = "0xfb6916095ca1df60bb79ce92ce3ea74c37c5d359";
        assert_eq!(
            normalize_address(addr),
            "0xfB6916095ca1df60bB79Ce92cE3Ea74c37c5d359"
        );
    }

    #[test]
    fn normalize_repairs_wrong_casing() {
        let addr = "0x5AAEB6053F3E94C9b9A09f33669435E7Ef1BeAed";
        assert_eq!(
            normalize_address(addr),
            "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed"
        );
    }

    #[test]
    fn normalize_keeps_opaque_accounts() {
        assert_eq!(normalize_address("0xAAA1"), "0xAAA1");
        assert_eq!(normalize_address("account-7"), "account-7");
    }

    #[test]
    fn checksum_address_invalid_length() {
        assert!(checksum_address("0xdeadbeef").is_err());
    }
}
