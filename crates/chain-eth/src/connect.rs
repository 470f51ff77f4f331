//! EVM connect protocol: acquire the provider, request accounts, reconcile
//! the active chain (switching or adding it), then read the balance.
//!
//! Nothing here retries. Every step can fail on its own and the first
//! failure aborts the attempt.

use std::fmt;
use std::sync::Arc;

use crate::address::normalize_address;
use crate::balance::format_balance;
use crate::chains::EvmChain;
use crate::error::EthError;
use crate::provider::EvmProvider;
use crate::rpc;
use crate::wallet::EvmWallet;

/// Result of a successful EVM connection.
#[derive(Clone)]
pub struct EvmConnection {
    /// First account exposed by the wallet, EIP-55 checksummed.
    pub address: String,
    /// Formatted native balance, e.g. `1.2345 ETH`.
    pub balance: String,
    pub provider: Arc<dyn EvmProvider>,
}

impl fmt::Debug for EvmConnection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EvmConnection")
            .field("address", &self.address)
            .field("balance", &self.balance)
            .finish_non_exhaustive()
    }
}

/// Runs the full connect protocol for `wallet` against `target`.
pub async fn connect_evm(wallet: &EvmWallet, target: &EvmChain) -> Result<EvmConnection, EthError> {
    log::info!("Connecting {} on {}", wallet.name, target.name);

    let provider = wallet.connector.connect().await?;

    let accounts = rpc::request_accounts(provider.as_ref()).await?;
    let first = accounts.first().ok_or(EthError::NoAccounts)?;
    let address = normalize_address(first);

    ensure_chain(provider.as_ref(), target).await?;

    let balance = fetch_balance(provider.as_ref(), &address, target).await?;

    log::info!("{} connected on {} as {}", wallet.name, target.name, address);
    Ok(EvmConnection {
        address,
        balance,
        provider,
    })
}

/// Makes sure the wallet is on `target`, switching if needed and adding the
/// network first when the wallet does not know it.
pub async fn ensure_chain(provider: &dyn EvmProvider, target: &EvmChain) -> Result<(), EthError> {
    let current = rpc::chain_id(provider).await?;
    if current == target.chain_id {
        return Ok(());
    }

    log::info!(
        "Wallet is on chain {}, switching to {} ({})",
        current,
        target.name,
        target.chain_id_hex()
    );

    match rpc::switch_chain(provider, target.chain_id).await {
        Ok(()) => Ok(()),
        Err(e) if e.is_unrecognized_chain() => {
            log::info!("{} unknown to wallet, requesting add-chain", target.name);
            rpc::add_chain(provider, &target.add_chain_parameter()).await
        }
        Err(e) => Err(EthError::ChainSwitchFailed {
            code: e.code,
            message: e.message,
        }),
    }
}

/// Reads and formats the native balance of `address`.
pub async fn fetch_balance(
    provider: &dyn EvmProvider,
    address: &str,
    target: &EvmChain,
) -> Result<String, EthError> {
    let wei = rpc::get_balance(provider, address).await?;
    Ok(format_balance(wei, target.decimals, target.symbol))
}
