/// Lamports in one SOL.
pub const LAMPORTS_PER_SOL: u64 = 1_000_000_000;

/// Formats a lamport amount with two fractional digits, rounding half up,
/// e.g. `3.00 SOL`.
pub fn format_sol_balance(lamports: u64) -> String {
    let lamports_per_sol = u128::from(LAMPORTS_PER_SOL);
    let cents = (u128::from(lamports) * 100 + lamports_per_sol / 2) / lamports_per_sol;
    format!("{}.{:02} SOL", cents / 100, cents % 100)
}
