//! The host environment that wallet extensions inject providers into.

use std::sync::{Arc, RwLock};

use chain_eth::provider::EvmProvider;
use chain_sol::provider::SolanaProvider;

/// Snapshot of the injection slots a host exposes.
#[derive(Clone, Default)]
pub struct InjectedProviders {
    /// The EIP-1193 slot (`window.ethereum`).
    pub ethereum: Option<Arc<dyn EvmProvider>>,
    /// `window.solana`, claimed by Phantom.
    pub solana: Option<Arc<dyn SolanaProvider>>,
    /// `window.solflare`.
    pub solflare: Option<Arc<dyn SolanaProvider>>,
}

/// Source of injected providers.
///
/// `None` means the host has no injection points at all, as in a headless
/// process; an interactive host with nothing installed returns empty slots.
pub trait HostEnvironment: Send + Sync {
    fn injected(&self) -> Option<InjectedProviders>;
}

/// A host without injection points.
#[derive(Debug, Clone, Copy, Default)]
pub struct Headless;

impl HostEnvironment for Headless {
    fn injected(&self) -> Option<InjectedProviders> {
        None
    }
}

/// An interactive host whose slots extensions can fill or clear at any time.
#[derive(Default)]
pub struct InjectedHost {
    slots: RwLock<InjectedProviders>,
}

impl InjectedHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn inject_ethereum(&self, provider: Option<Arc<dyn EvmProvider>>) {
        self.write(|slots| slots.ethereum = provider);
    }

    pub fn inject_solana(&self, provider: Option<Arc<dyn SolanaProvider>>) {
        self.write(|slots| slots.solana = provider);
    }

    pub fn inject_solflare(&self, provider: Option<Arc<dyn SolanaProvider>>) {
        self.write(|slots| slots.solflare = provider);
    }

    fn write(&self, f: impl FnOnce(&mut InjectedProviders)) {
        let mut slots = self.slots.write().unwrap_or_else(|e| e.into_inner());
        f(&mut slots);
    }
}

impl HostEnvironment for InjectedHost {
    fn injected(&self) -> Option<InjectedProviders> {
        let slots = self.slots.read().unwrap_or_else(|e| e.into_inner());
        Some(slots.clone())
    }
}
