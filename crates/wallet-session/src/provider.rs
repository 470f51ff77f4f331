//! Live provider handles kept next to connected wallets.

use std::fmt;
use std::sync::Arc;

use chain_eth::provider::EvmProvider;
use chain_sol::provider::SolanaProvider;

use crate::chains::ChainFamily;
use crate::error::WalletError;

/// A live wallet session, one variant per chain family.
///
/// Never serialized. A wallet restored from storage has no handle until it
/// reconnects.
#[derive(Clone)]
pub enum ProviderHandle {
    Evm(Arc<dyn EvmProvider>),
    Solana(Arc<dyn SolanaProvider>),
}

impl ProviderHandle {
    pub fn family(&self) -> ChainFamily {
        match self {
            ProviderHandle::Evm(_) => ChainFamily::Evm,
            ProviderHandle::Solana(_) => ChainFamily::Solana,
        }
    }

    /// Ends the session at the wallet. EIP-1193 has no disconnect request,
    /// so EVM sessions are only dropped locally.
    pub async fn disconnect(&self) -> Result<(), WalletError> {
        match self {
            ProviderHandle::Evm(_) => Ok(()),
            ProviderHandle::Solana(p) => p.disconnect().await.map_err(WalletError::from),
        }
    }
}

impl fmt::Debug for ProviderHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderHandle::Evm(_) => f.write_str("ProviderHandle::Evm(..)"),
            ProviderHandle::Solana(_) => f.write_str("ProviderHandle::Solana(..)"),
        }
    }
}
