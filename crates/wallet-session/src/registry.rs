//! The authoritative set of connected wallets.
//!
//! At most one wallet is active at a time, and exactly one whenever the set
//! is non-empty. Every mutation runs under one lock: the next state is built
//! on a copy, saved, and only then committed, so a failed write leaves the
//! registry as it was.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::error::WalletError;
use crate::provider::ProviderHandle;
use crate::storage::{MemoryStore, PersistedState, StateStore};
use crate::types::{ConnectedWallet, NewWallet};

#[derive(Default)]
struct RegistryState {
    /// Connection order.
    wallets: Vec<ConnectedWallet>,
    /// Live sessions by wallet id. Never persisted.
    providers: HashMap<String, ProviderHandle>,
}

impl RegistryState {
    fn position(&self, id: &str) -> Option<usize> {
        self.wallets.iter().position(|w| w.id == id)
    }

    fn active(&self) -> Option<&ConnectedWallet> {
        self.wallets.iter().find(|w| w.is_active)
    }
}

fn snapshot_of(wallets: &[ConnectedWallet]) -> PersistedState {
    PersistedState {
        connected_wallets: wallets.to_vec(),
        active_wallet: wallets.iter().find(|w| w.is_active).cloned(),
    }
}

fn mark_active(wallets: &mut [ConnectedWallet], id: Option<&str>) {
    for wallet in wallets.iter_mut() {
        wallet.is_active = Some(wallet.id.as_str()) == id;
    }
}

/// Rebuilds a consistent wallet list from a stored record. Returns the list
/// and whether anything had to change.
fn repair(state: PersistedState) -> (Vec<ConnectedWallet>, bool) {
    let mut repaired = false;

    let mut wallets: Vec<ConnectedWallet> = Vec::with_capacity(state.connected_wallets.len());
    for wallet in state.connected_wallets {
        if wallets.iter().any(|w| w.id == wallet.id) {
            repaired = true;
            continue;
        }
        wallets.push(wallet);
    }

    let pointer = state
        .active_wallet
        .map(|w| w.id)
        .filter(|id| wallets.iter().any(|w| &w.id == id));
    let active = pointer
        .clone()
        .or_else(|| wallets.iter().find(|w| w.is_active).map(|w| w.id.clone()))
        .or_else(|| wallets.first().map(|w| w.id.clone()));

    if pointer.is_none() && active.is_some() {
        repaired = true;
    }
    let flagged = wallets.iter().filter(|w| w.is_active).count();
    let expected = usize::from(active.is_some());
    let flag_matches = wallets
        .iter()
        .all(|w| w.is_active == (Some(&w.id) == active.as_ref()));
    if flagged != expected || !flag_matches {
        repaired = true;
    }

    mark_active(&mut wallets, active.as_deref());
    (wallets, repaired)
}

pub struct WalletRegistry {
    state: Mutex<RegistryState>,
    store: Arc<dyn StateStore>,
}

impl WalletRegistry {
    /// Opens the registry over `store`, restoring whatever it holds.
    ///
    /// Restored wallets have no live provider until they reconnect.
    pub fn new(store: Arc<dyn StateStore>) -> Result<Self, WalletError> {
        let wallets = match store.load()? {
            Some(persisted) => {
                let (wallets, repaired) = repair(persisted);
                if repaired {
                    log::warn!("Repaired inconsistent wallet state on load");
                    if let Err(e) = store.save(&snapshot_of(&wallets)) {
                        log::warn!("Failed to persist repaired wallet state: {}", e);
                    }
                }
                wallets
            }
            None => Vec::new(),
        };
        log::info!("Wallet registry opened with {} wallet(s)", wallets.len());

        Ok(Self {
            state: Mutex::new(RegistryState {
                wallets,
                providers: HashMap::new(),
            }),
            store,
        })
    }

    /// A registry that is not backed by anything durable.
    pub fn in_memory() -> Self {
        Self {
            state: Mutex::new(RegistryState::default()),
            store: Arc::new(MemoryStore::new()),
        }
    }

    fn lock(&self) -> MutexGuard<'_, RegistryState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn commit(&self, state: &mut RegistryState, next: Vec<ConnectedWallet>) -> Result<(), WalletError> {
        if let Err(e) = self.store.save(&snapshot_of(&next)) {
            log::warn!("Failed to persist wallet state: {}", e);
            return Err(e.into());
        }
        state.wallets = next;
        Ok(())
    }

    /// Upserts a wallet by (chain, address) and makes it the active one.
    pub fn add_wallet(&self, data: NewWallet) -> Result<ConnectedWallet, WalletError> {
        let id = data.id();
        let mut state = self.lock();

        let mut next = state.wallets.clone();
        let entry = ConnectedWallet {
            id: id.clone(),
            address: data.address,
            balance: data.balance,
            chain_id: data.chain_id,
            wallet_name: data.wallet_name,
            is_active: true,
        };
        match next.iter_mut().find(|w| w.id == id) {
            Some(existing) => *existing = entry.clone(),
            None => next.push(entry.clone()),
        }
        mark_active(&mut next, Some(id.as_str()));

        self.commit(&mut state, next)?;
        match data.provider {
            Some(provider) => {
                state.providers.insert(id.clone(), provider);
            }
            None => {
                state.providers.remove(&id);
            }
        }

        log::debug!("Wallet {} added, {} connected", id, state.wallets.len());
        Ok(entry)
    }

    /// Removes a wallet. When it was active, the first remaining wallet
    /// becomes active.
    pub fn remove_wallet(&self, id: &str) -> Result<ConnectedWallet, WalletError> {
        let mut state = self.lock();
        let index = state
            .position(id)
            .ok_or_else(|| WalletError::WalletNotFound(id.to_string()))?;

        let mut next = state.wallets.clone();
        let removed = next.remove(index);
        if removed.is_active {
            if let Some(first) = next.first_mut() {
                first.is_active = true;
            }
        }

        self.commit(&mut state, next)?;
        state.providers.remove(id);

        log::debug!("Wallet {} removed, {} connected", id, state.wallets.len());
        Ok(removed)
    }

    pub fn set_active_wallet(&self, id: &str) -> Result<(), WalletError> {
        let mut state = self.lock();
        if state.position(id).is_none() {
            return Err(WalletError::WalletNotFound(id.to_string()));
        }

        let mut next = state.wallets.clone();
        mark_active(&mut next, Some(id));
        self.commit(&mut state, next)?;

        log::debug!("Wallet {} is now active", id);
        Ok(())
    }

    /// Replaces the balance of one wallet. Active status is unchanged.
    pub fn update_wallet_balance(&self, id: &str, balance: &str) -> Result<(), WalletError> {
        let mut state = self.lock();
        let index = state
            .position(id)
            .ok_or_else(|| WalletError::WalletNotFound(id.to_string()))?;

        let mut next = state.wallets.clone();
        next[index].balance = balance.to_string();
        self.commit(&mut state, next)
    }

    pub fn clear_all_wallets(&self) -> Result<(), WalletError> {
        let mut state = self.lock();
        self.commit(&mut state, Vec::new())?;
        state.providers.clear();
        log::debug!("All wallets cleared");
        Ok(())
    }

    pub fn wallets_by_chain(&self, chain_id: &str) -> Vec<ConnectedWallet> {
        self.lock()
            .wallets
            .iter()
            .filter(|w| w.chain_id == chain_id)
            .cloned()
            .collect()
    }

    pub fn connected_wallets(&self) -> Vec<ConnectedWallet> {
        self.lock().wallets.clone()
    }

    pub fn active_wallet(&self) -> Option<ConnectedWallet> {
        self.lock().active().cloned()
    }

    pub fn wallet(&self, id: &str) -> Option<ConnectedWallet> {
        self.lock().wallets.iter().find(|w| w.id == id).cloned()
    }

    /// Live session for a wallet, absent for wallets restored from storage.
    pub fn provider(&self, id: &str) -> Option<ProviderHandle> {
        self.lock().providers.get(id).cloned()
    }

    /// The state exactly as it would be persisted.
    pub fn snapshot(&self) -> PersistedState {
        snapshot_of(&self.lock().wallets)
    }
}
