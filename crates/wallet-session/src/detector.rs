//! Lists the wallets a user can connect with, per chain family.
//!
//! Detection reads the host's injection slots on every call. Extensions can
//! be installed, removed or replaced at any time, so nothing is cached.

use std::sync::Arc;

use chain_eth::wallet::{EvmWallet, WalletConnectConnector};
use chain_sol::wallet::SolanaWallet;

use crate::chains::{Chain, ChainFamily};
use crate::host::HostEnvironment;

pub const METAMASK: &str = "MetaMask";
pub const COINBASE_WALLET: &str = "Coinbase Wallet";
pub const WALLET_CONNECT: &str = "WalletConnect";
pub const PHANTOM: &str = "Phantom";
pub const SOLFLARE: &str = "Solflare";

/// A wallet offered for connection, not yet connected.
#[derive(Debug, Clone)]
pub enum WalletProviderDescriptor {
    Evm(EvmWallet),
    Solana(SolanaWallet),
}

impl WalletProviderDescriptor {
    pub fn name(&self) -> &str {
        match self {
            WalletProviderDescriptor::Evm(w) => &w.name,
            WalletProviderDescriptor::Solana(w) => &w.name,
        }
    }

    pub fn icon(&self) -> &str {
        match self {
            WalletProviderDescriptor::Evm(w) => &w.icon,
            WalletProviderDescriptor::Solana(w) => &w.icon,
        }
    }

    pub fn installed(&self) -> bool {
        match self {
            WalletProviderDescriptor::Evm(w) => w.installed,
            WalletProviderDescriptor::Solana(w) => w.installed,
        }
    }

    pub fn family(&self) -> ChainFamily {
        match self {
            WalletProviderDescriptor::Evm(_) => ChainFamily::Evm,
            WalletProviderDescriptor::Solana(_) => ChainFamily::Solana,
        }
    }
}

pub struct ProviderDetector {
    host: Arc<dyn HostEnvironment>,
}

impl ProviderDetector {
    pub fn new(host: Arc<dyn HostEnvironment>) -> Self {
        Self { host }
    }

    /// EVM wallets: MetaMask and Coinbase Wallet when their flag is set on
    /// the injected provider, plus WalletConnect, which is always listed
    /// but cannot connect yet.
    pub fn detect_evm_providers(&self) -> Vec<WalletProviderDescriptor> {
        let Some(slots) = self.host.injected() else {
            return Vec::new();
        };

        let mut wallets = Vec::new();
        if let Some(ethereum) = slots.ethereum {
            if ethereum.is_meta_mask() {
                wallets.push(EvmWallet::injected(METAMASK, "🦊", Arc::clone(&ethereum)));
            }
            if ethereum.is_coinbase_wallet() {
                wallets.push(EvmWallet::injected(COINBASE_WALLET, "🔵", ethereum));
            }
        }
        wallets.push(EvmWallet {
            name: WALLET_CONNECT.to_string(),
            icon: "🔗".to_string(),
            installed: true,
            connector: Arc::new(WalletConnectConnector),
        });

        log::debug!(
            "Detected EVM wallets: {:?}",
            wallets.iter().map(|w| w.name.as_str()).collect::<Vec<_>>()
        );
        wallets.into_iter().map(WalletProviderDescriptor::Evm).collect()
    }

    /// Solana wallets: Phantom on the `solana` slot and Solflare on its own
    /// slot, each recognized by its flag.
    pub fn detect_solana_providers(&self) -> Vec<WalletProviderDescriptor> {
        let Some(slots) = self.host.injected() else {
            return Vec::new();
        };

        let mut wallets = Vec::new();
        if let Some(phantom) = slots.solana.filter(|p| p.is_phantom()) {
            wallets.push(SolanaWallet::injected(PHANTOM, "👻", phantom));
        }
        if let Some(solflare) = slots.solflare.filter(|p| p.is_solflare()) {
            wallets.push(SolanaWallet::injected(SOLFLARE, "🔥", solflare));
        }

        log::debug!(
            "Detected Solana wallets: {:?}",
            wallets.iter().map(|w| w.name.as_str()).collect::<Vec<_>>()
        );
        wallets.into_iter().map(WalletProviderDescriptor::Solana).collect()
    }

    pub fn detect_for_chain(&self, chain: &Chain) -> Vec<WalletProviderDescriptor> {
        match chain.family {
            ChainFamily::Evm => self.detect_evm_providers(),
            ChainFamily::Solana => self.detect_solana_providers(),
        }
    }
}
