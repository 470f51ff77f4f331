//! Consumer-facing wallet API: derived views over the registry plus the
//! connect, switch and disconnect flows.

use std::sync::Arc;

use chain_sol::provider::BalanceSource;

use crate::chains::{find_chain, Chain};
use crate::config::WalletConfig;
use crate::detector::{ProviderDetector, WalletProviderDescriptor};
use crate::error::WalletError;
use crate::host::HostEnvironment;
use crate::negotiator::Negotiator;
use crate::registry::WalletRegistry;
use crate::storage::{FileStore, MemoryStore, StateStore};
use crate::types::{ConnectedWallet, NewWallet};

/// Length of the shortened form: 6 + `...` + 4.
const SHORT_ADDRESS_LEN: usize = 13;

/// Shortens an address for display: first 6 characters, `...`, last 4.
///
/// Addresses of 13 characters or fewer are returned unchanged, since the
/// short form would be no shorter.
pub fn format_address(address: &str) -> String {
    let chars: Vec<char> = address.chars().collect();
    if chars.len() <= SHORT_ADDRESS_LEN {
        return address.to_string();
    }
    let head: String = chars[..6].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{head}...{tail}")
}

pub struct WalletFacade {
    registry: Arc<WalletRegistry>,
    detector: ProviderDetector,
    negotiator: Negotiator,
}

impl WalletFacade {
    pub fn new(
        registry: Arc<WalletRegistry>,
        host: Arc<dyn HostEnvironment>,
        balances: Arc<dyn BalanceSource>,
    ) -> Self {
        Self {
            registry,
            detector: ProviderDetector::new(host),
            negotiator: Negotiator::new(balances),
        }
    }

    /// Opens the registry where `config` says and wires up detection.
    pub fn from_config(
        config: &WalletConfig,
        host: Arc<dyn HostEnvironment>,
        balances: Arc<dyn BalanceSource>,
    ) -> Result<Self, WalletError> {
        let store: Arc<dyn StateStore> = if config.persist {
            Arc::new(FileStore::from_config(config))
        } else {
            Arc::new(MemoryStore::new())
        };
        let registry = Arc::new(WalletRegistry::new(store)?);
        Ok(Self::new(registry, host, balances))
    }

    pub fn registry(&self) -> &Arc<WalletRegistry> {
        &self.registry
    }

    pub fn is_connected(&self) -> bool {
        self.registry.active_wallet().is_some()
    }

    pub fn has_multiple_wallets(&self) -> bool {
        self.registry.connected_wallets().len() > 1
    }

    /// Chain of the active wallet.
    pub fn active_chain(&self) -> Option<&'static Chain> {
        self.registry
            .active_wallet()
            .and_then(|w| find_chain(&w.chain_id))
    }

    pub fn connected_wallets(&self) -> Vec<ConnectedWallet> {
        self.registry.connected_wallets()
    }

    pub fn active_wallet(&self) -> Option<ConnectedWallet> {
        self.registry.active_wallet()
    }

    pub fn wallets_for_chain(&self, chain_id: &str) -> Vec<ConnectedWallet> {
        self.registry.wallets_by_chain(chain_id)
    }

    /// Name of the wallet whose connection is pending, if any.
    pub fn connecting(&self) -> Option<String> {
        self.negotiator.connecting()
    }

    /// Wallets the user can pick for `chain_id`, detected fresh.
    pub fn available_wallets(
        &self,
        chain_id: &str,
    ) -> Result<Vec<WalletProviderDescriptor>, WalletError> {
        let chain = lookup_chain(chain_id)?;
        Ok(self.detector.detect_for_chain(chain))
    }

    /// Connects the detected wallet named `wallet_name` on `chain_id` and
    /// makes it the active wallet.
    pub async fn connect(
        &self,
        chain_id: &str,
        wallet_name: &str,
    ) -> Result<ConnectedWallet, WalletError> {
        let descriptor = self
            .available_wallets(chain_id)?
            .into_iter()
            .find(|d| d.name() == wallet_name)
            .ok_or_else(|| {
                WalletError::ProviderUnavailable(format!("{wallet_name} is not installed"))
            })?;
        self.connect_with(chain_id, &descriptor).await
    }

    /// Connects an already chosen descriptor on `chain_id`.
    pub async fn connect_with(
        &self,
        chain_id: &str,
        descriptor: &WalletProviderDescriptor,
    ) -> Result<ConnectedWallet, WalletError> {
        let chain = lookup_chain(chain_id)?;
        let result = self.negotiator.connect(chain, descriptor).await?;

        self.registry.add_wallet(NewWallet {
            address: result.address,
            balance: result.balance,
            chain_id: chain.id.to_string(),
            wallet_name: descriptor.name().to_string(),
            provider: Some(result.provider),
        })
    }

    pub fn add_wallet(&self, wallet: NewWallet) -> Result<ConnectedWallet, WalletError> {
        self.registry.add_wallet(wallet)
    }

    pub fn switch_to_wallet(&self, id: &str) -> Result<(), WalletError> {
        self.registry.set_active_wallet(id)
    }

    /// Ends the wallet's live session, if it has one, and removes it.
    ///
    /// A provider that fails to disconnect does not keep the wallet around.
    pub async fn disconnect_wallet(&self, id: &str) -> Result<ConnectedWallet, WalletError> {
        if self.registry.wallet(id).is_none() {
            return Err(WalletError::WalletNotFound(id.to_string()));
        }
        if let Some(provider) = self.registry.provider(id) {
            if let Err(e) = provider.disconnect().await {
                log::warn!("Provider disconnect failed for {}: {}", id, e);
            }
        }
        self.registry.remove_wallet(id)
    }

    pub async fn disconnect_all_wallets(&self) -> Result<(), WalletError> {
        for wallet in self.registry.connected_wallets() {
            if let Some(provider) = self.registry.provider(&wallet.id) {
                if let Err(e) = provider.disconnect().await {
                    log::warn!("Provider disconnect failed for {}: {}", wallet.id, e);
                }
            }
        }
        self.registry.clear_all_wallets()
    }

    pub fn update_wallet_balance(&self, id: &str, balance: &str) -> Result<(), WalletError> {
        self.registry.update_wallet_balance(id, balance)
    }

    /// Re-reads a wallet's balance through its live session and stores it.
    ///
    /// Returns `Ok(None)` for a wallet restored from storage, which has no
    /// session to ask.
    pub async fn refresh_balance(&self, id: &str) -> Result<Option<String>, WalletError> {
        let wallet = self
            .registry
            .wallet(id)
            .ok_or_else(|| WalletError::WalletNotFound(id.to_string()))?;
        let Some(provider) = self.registry.provider(id) else {
            log::debug!("No live provider for {}, balance left as is", id);
            return Ok(None);
        };

        let chain = lookup_chain(&wallet.chain_id)?;
        let balance = self
            .negotiator
            .fetch_balance(chain, &wallet.address, &provider)
            .await?;
        self.registry.update_wallet_balance(id, &balance)?;
        Ok(Some(balance))
    }
}

fn lookup_chain(chain_id: &str) -> Result<&'static Chain, WalletError> {
    find_chain(chain_id).ok_or_else(|| WalletError::UnsupportedChain(chain_id.to_string()))
}
