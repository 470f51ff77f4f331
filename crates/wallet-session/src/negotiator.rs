//! Runs the connect protocol matching a chain's family and keeps at most one
//! attempt in flight, so a user never sees two authorization prompts at once.

use std::sync::{Arc, Mutex, MutexGuard};

use chain_eth::connect::connect_evm;
use chain_sol::connect::connect_solana;
use chain_sol::provider::BalanceSource;

use crate::chains::{Chain, ChainFamily};
use crate::detector::WalletProviderDescriptor;
use crate::error::WalletError;
use crate::provider::ProviderHandle;

/// Normalized outcome of a successful connection.
#[derive(Debug, Clone)]
pub struct ConnectionResult {
    pub address: String,
    pub balance: String,
    pub provider: ProviderHandle,
}

pub struct Negotiator {
    balances: Arc<dyn BalanceSource>,
    /// Name of the wallet whose attempt is pending.
    connecting: Mutex<Option<String>>,
}

/// Clears the in-flight marker when the attempt settles or is dropped.
struct ConnectingGuard<'a> {
    slot: &'a Mutex<Option<String>>,
}

impl Drop for ConnectingGuard<'_> {
    fn drop(&mut self) {
        *lock(self.slot) = None;
    }
}

fn lock(slot: &Mutex<Option<String>>) -> MutexGuard<'_, Option<String>> {
    slot.lock().unwrap_or_else(|e| e.into_inner())
}

impl Negotiator {
    /// `balances` answers Solana balance lookups; EVM balances come from the
    /// wallet's own provider.
    pub fn new(balances: Arc<dyn BalanceSource>) -> Self {
        Self {
            balances,
            connecting: Mutex::new(None),
        }
    }

    /// Name of the wallet currently being connected, if any.
    pub fn connecting(&self) -> Option<String> {
        lock(&self.connecting).clone()
    }

    fn begin(&self, wallet: &str) -> Result<ConnectingGuard<'_>, WalletError> {
        let mut slot = lock(&self.connecting);
        if let Some(pending) = slot.as_ref() {
            return Err(WalletError::ConnectionInProgress(pending.clone()));
        }
        *slot = Some(wallet.to_string());
        Ok(ConnectingGuard {
            slot: &self.connecting,
        })
    }

    /// Connects `descriptor` on `chain`.
    pub async fn connect(
        &self,
        chain: &Chain,
        descriptor: &WalletProviderDescriptor,
    ) -> Result<ConnectionResult, WalletError> {
        if descriptor.family() != chain.family {
            return Err(WalletError::FamilyMismatch {
                wallet: descriptor.name().to_string(),
                chain: chain.id.to_string(),
            });
        }

        let _guard = self.begin(descriptor.name())?;

        let result = match descriptor {
            WalletProviderDescriptor::Evm(wallet) => {
                let network = chain.evm_network()?;
                connect_evm(wallet, &network)
                    .await
                    .map(|c| ConnectionResult {
                        address: c.address,
                        balance: c.balance,
                        provider: ProviderHandle::Evm(c.provider),
                    })
                    .map_err(WalletError::from)
            }
            WalletProviderDescriptor::Solana(wallet) => {
                connect_solana(wallet, self.balances.as_ref())
                    .await
                    .map(|c| ConnectionResult {
                        address: c.address,
                        balance: c.balance,
                        provider: ProviderHandle::Solana(c.provider),
                    })
                    .map_err(WalletError::from)
            }
        };

        if let Err(e) = &result {
            log::warn!("{} failed to connect on {}: {}", descriptor.name(), chain.id, e);
        }
        result
    }

    /// Re-reads the balance of `address` through a live session.
    pub async fn fetch_balance(
        &self,
        chain: &Chain,
        address: &str,
        provider: &ProviderHandle,
    ) -> Result<String, WalletError> {
        match (chain.family, provider) {
            (ChainFamily::Evm, ProviderHandle::Evm(p)) => {
                let network = chain.evm_network()?;
                Ok(chain_eth::connect::fetch_balance(p.as_ref(), address, &network).await?)
            }
            (ChainFamily::Solana, ProviderHandle::Solana(_)) => {
                Ok(chain_sol::connect::fetch_balance(self.balances.as_ref(), address).await?)
            }
            _ => Err(WalletError::FamilyMismatch {
                wallet: format!("{:?}", provider.family()),
                chain: chain.id.to_string(),
            }),
        }
    }
}
