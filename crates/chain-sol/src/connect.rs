//! Solana connect protocol: acquire the provider, authorize, then read the
//! balance through the injected ledger source.

use std::fmt;
use std::sync::Arc;

use crate::address::validate_address;
use crate::balance::format_sol_balance;
use crate::error::SolError;
use crate::provider::{BalanceSource, SolanaProvider};
use crate::wallet::SolanaWallet;

/// Result of a successful Solana connection.
#[derive(Clone)]
pub struct SolanaConnection {
    pub address: String,
    /// Formatted balance, e.g. `3.00 SOL`.
    pub balance: String,
    pub provider: Arc<dyn SolanaProvider>,
}

impl fmt::Debug for SolanaConnection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SolanaConnection")
            .field("address", &self.address)
            .field("balance", &self.balance)
            .finish_non_exhaustive()
    }
}

/// Runs the connect protocol for `wallet`.
pub async fn connect_solana(
    wallet: &SolanaWallet,
    balances: &dyn BalanceSource,
) -> Result<SolanaConnection, SolError> {
    log::info!("Connecting {} on Solana", wallet.name);

    let provider = wallet.connector.connect().await?;

    let response = provider.connect().await.map_err(|e| match e {
        SolError::ConnectionRejected(_) => e,
        other => SolError::ConnectionRejected(other.to_string()),
    })?;

    let address = response
        .public_key
        .filter(|key| !key.is_empty())
        .ok_or_else(|| SolError::ConnectionRejected("no public key returned".into()))?;
    if let Err(e) = validate_address(&address) {
        log::warn!("{} returned a non-standard account key: {}", wallet.name, e);
    }

    let balance = fetch_balance(balances, &address).await?;

    log::info!("{} connected on Solana as {}", wallet.name, address);
    Ok(SolanaConnection {
        address,
        balance,
        provider,
    })
}

/// Reads and formats the balance of `address`.
pub async fn fetch_balance(balances: &dyn BalanceSource, address: &str) -> Result<String, SolError> {
    let lamports = balances.get_balance(address).await?;
    Ok(format_sol_balance(lamports))
}
