//! Capabilities of an injected Solana wallet.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::SolError;

/// What a wallet's `connect()` resolves to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectResponse {
    /// Base58 account key. Absent when the wallet did not authorize.
    #[serde(default)]
    pub public_key: Option<String>,
}

/// A live Solana wallet session.
#[async_trait]
pub trait SolanaProvider: Send + Sync {
    /// Set by Phantom on `window.solana`.
    fn is_phantom(&self) -> bool {
        false
    }

    /// Set by Solflare on `window.solflare`.
    fn is_solflare(&self) -> bool {
        false
    }

    /// Asks the wallet to connect. May wait on a user prompt.
    async fn connect(&self) -> Result<ConnectResponse, SolError>;

    async fn disconnect(&self) -> Result<(), SolError> {
        Ok(())
    }
}

/// Ledger lookup used to display an account balance.
#[async_trait]
pub trait BalanceSource: Send + Sync {
    /// Balance of `address` in lamports.
    async fn get_balance(&self, address: &str) -> Result<u64, SolError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connect_response_from_wallet_json() {
        let resp: ConnectResponse = serde_json::from_str(
            r#"{"publicKey":"11111111111111111111111111111111"}"#,
        )
        .unwrap();
        assert_eq!(
            resp.public_key.as_deref(),
            Some("11111111111111111111111111111111")
        );
    }

    #[test]
    fn connect_response_without_key() {
        let resp: ConnectResponse = serde_json::from_str("{}").unwrap();
        assert!(resp.public_key.is_none());
    }
}
