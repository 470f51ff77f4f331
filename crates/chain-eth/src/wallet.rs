//! EVM wallet descriptors and their connectors.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;

use crate::error::EthError;
use crate::provider::EvmProvider;

/// Produces a live provider handle for a wallet, or fails.
#[async_trait]
pub trait EvmConnector: Send + Sync {
    async fn connect(&self) -> Result<Arc<dyn EvmProvider>, EthError>;
}

/// Connector for a provider object injected by a browser extension.
pub struct InjectedConnector {
    provider: Arc<dyn EvmProvider>,
}

impl InjectedConnector {
    pub fn new(provider: Arc<dyn EvmProvider>) -> Self {
        Self { provider }
    }
}

#[async_trait]
impl EvmConnector for InjectedConnector {
    async fn connect(&self) -> Result<Arc<dyn EvmProvider>, EthError> {
        Ok(Arc::clone(&self.provider))
    }
}

/// Placeholder for the WalletConnect relay. Listed so callers can offer it,
/// but it cannot produce a session yet.
pub struct WalletConnectConnector;

#[async_trait]
impl EvmConnector for WalletConnectConnector {
    async fn connect(&self) -> Result<Arc<dyn EvmProvider>, EthError> {
        Err(EthError::ProviderUnavailable(
            "WalletConnect not implemented yet".into(),
        ))
    }
}

/// An EVM wallet offered to the user.
#[derive(Clone)]
pub struct EvmWallet {
    pub name: String,
    pub icon: String,
    pub installed: bool,
    pub connector: Arc<dyn EvmConnector>,
}

impl EvmWallet {
    pub fn injected(name: &str, icon: &str, provider: Arc<dyn EvmProvider>) -> Self {
        Self {
            name: name.to_string(),
            icon: icon.to_string(),
            installed: true,
            connector: Arc::new(InjectedConnector::new(provider)),
        }
    }
}

impl fmt::Debug for EvmWallet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EvmWallet")
            .field("name", &self.name)
            .field("icon", &self.icon)
            .field("installed", &self.installed)
            .finish_non_exhaustive()
    }
}
