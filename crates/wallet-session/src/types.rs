use serde::{Deserialize, Serialize};

use crate::provider::ProviderHandle;

/// Deterministic wallet key: one entry per (chain, address) pair.
pub fn wallet_id(chain_id: &str, address: &str) -> String {
    format!("{chain_id}-{address}")
}

/// A wallet connection as stored in the registry.
///
/// The live provider handle is not part of this record; the registry keeps
/// it in memory next to the list and it is absent after a reload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectedWallet {
    pub id: String,
    pub address: String,
    /// Display string, already carrying the currency symbol.
    pub balance: String,
    pub chain_id: String,
    pub wallet_name: String,
    pub is_active: bool,
}

/// Input to [`WalletRegistry::add_wallet`](crate::registry::WalletRegistry::add_wallet).
#[derive(Debug, Clone)]
pub struct NewWallet {
    pub address: String,
    pub balance: String,
    pub chain_id: String,
    pub wallet_name: String,
    pub provider: Option<ProviderHandle>,
}

impl NewWallet {
    pub fn id(&self) -> String {
        wallet_id(&self.chain_id, &self.address)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_joins_chain_and_address() {
        assert_eq!(wallet_id("solana", "Sol111"), "solana-Sol111");
        assert_eq!(wallet_id("ethereum", "0xAAA1"), "ethereum-0xAAA1");
    }

    #[test]
    fn serializes_camel_case_without_provider() {
        let wallet = ConnectedWallet {
            id: "base-0xabc".into(),
            address: "0xabc".into(),
            balance: "0.5000 ETH".into(),
            chain_id: "base".into(),
            wallet_name: "Coinbase Wallet".into(),
            is_active: true,
        };
        let json = serde_json::to_value(&wallet).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": "base-0xabc",
                "address": "0xabc",
                "balance": "0.5000 ETH",
                "chainId": "base",
                "walletName": "Coinbase Wallet",
                "isActive": true
            })
        );
    }

    #[test]
    fn deserializes_record_with_stray_provider_field() {
        // Records written by older clients may carry a serialized provider stub.
        let wallet: ConnectedWallet = serde_json::from_str(
            r#"{"id":"solana-Sol111","address":"Sol111","balance":"3.00 SOL",
                "chainId":"solana","walletName":"Phantom","isActive":false,
                "provider":{}}"#,
        )
        .unwrap();
        assert_eq!(wallet.wallet_name, "Phantom");
        assert!(!wallet.is_active);
    }
}
