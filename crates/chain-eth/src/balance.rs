use alloy_primitives::U256;

/// Fractional digits shown for EVM balances.
pub const DISPLAY_PRECISION: u8 = 4;

fn pow10(exp: u8) -> U256 {
    (0..exp).fold(U256::from(1u64), |acc, _| acc * U256::from(10u64))
}

/// Converts an amount in the smallest unit to a decimal string with exactly
/// `precision` fractional digits, rounding half up.
pub fn format_units(value: U256, decimals: u8, precision: u8) -> String {
    let unit = pow10(decimals);
    let scale = pow10(precision);

    let scaled = value
        .saturating_mul(scale)
        .saturating_add(unit / U256::from(2u64))
        / unit;

    let whole = scaled / scale;
    if precision == 0 {
        return whole.to_string();
    }

    let frac = (scaled % scale).to_string();
    format!("{whole}.{frac:0>width$}", width = precision as usize)
}

/// Display balance for an EVM account, e.g. `1.2345 ETH`.
pub fn format_balance(wei: U256, decimals: u8, symbol: &str) -> String {
    format!("{} {symbol}", format_units(wei, decimals, DISPLAY_PRECISION))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wei(v: u128) -> U256 {
        U256::from(v)
    }

    #[test]
    fn zero_balance() {
        assert_eq!(format_balance(U256::ZERO, 18, "ETH"), "0.0000 ETH");
    }

    #[test]
    fn exact_four_digits() {
        assert_eq!(
            format_balance(wei(1_234_500_000_000_000_000), 18, "ETH"),
            "1.2345 ETH"
        );
    }

    #[test]
    fn rounds_half_up() {
        // 0.00005 ETH
        assert_eq!(format_balance(wei(50_000_000_000_000), 18, "ETH"), "0.0001 ETH");
        // 0.00004999... ETH
        assert_eq!(format_balance(wei(49_999_999_999_999), 18, "ETH"), "0.0000 ETH");
    }

    #[test]
    fn large_balance() {
        // 12,345.6789 AVAX
        assert_eq!(
            format_balance(wei(12_345_678_900_000_000_000_000), 18, "AVAX"),
            "12345.6789 AVAX"
        );
    }

    #[test]
    fn other_decimals() {
        assert_eq!(format_units(wei(1_500_000), 6, 2), "1.50");
        assert_eq!(format_units(wei(7), 0, 0), "7");
    }
}
