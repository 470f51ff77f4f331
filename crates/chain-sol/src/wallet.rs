//! Solana wallet descriptors and their connectors.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;

use crate::error::SolError;
use crate::provider::SolanaProvider;

/// Produces a live provider handle for a wallet, or fails.
#[async_trait]
pub trait SolanaConnector: Send + Sync {
    async fn connect(&self) -> Result<Arc<dyn SolanaProvider>, SolError>;
}

/// Connector for a provider object injected by a browser extension.
pub struct InjectedConnector {
    provider: Arc<dyn SolanaProvider>,
}

impl InjectedConnector {
    pub fn new(provider: Arc<dyn SolanaProvider>) -> Self {
        Self { provider }
    }
}

#[async_trait]
impl SolanaConnector for InjectedConnector {
    async fn connect(&self) -> Result<Arc<dyn SolanaProvider>, SolError> {
        Ok(Arc::clone(&self.provider))
    }
}

/// A Solana wallet offered to the user.
#[derive(Clone)]
pub struct SolanaWallet {
    pub name: String,
    pub icon: String,
    pub installed: bool,
    pub connector: Arc<dyn SolanaConnector>,
}

impl SolanaWallet {
    pub fn injected(name: &str, icon: &str, provider: Arc<dyn SolanaProvider>) -> Self {
        Self {
            name: name.to_string(),
            icon: icon.to_string(),
            installed: true,
            connector: Arc::new(InjectedConnector::new(provider)),
        }
    }
}

impl fmt::Debug for SolanaWallet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SolanaWallet")
            .field("name", &self.name)
            .field("icon", &self.icon)
            .field("installed", &self.installed)
            .finish_non_exhaustive()
    }
}
