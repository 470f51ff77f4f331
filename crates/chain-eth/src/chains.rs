use serde::{Deserialize, Serialize};

use crate::error::EthError;

/// Definition of an EVM-compatible network as the connect protocol needs it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvmChain {
    pub chain_id: u64,
    pub name: &'static str,
    pub currency_name: &'static str,
    pub symbol: &'static str,
    pub decimals: u8,
    pub rpc_url: &'static str,
    pub explorer_url: &'static str,
}

/// Slug to chain-id table for every EVM network the wallet can negotiate.
const CANONICAL_CHAIN_IDS: &[(&str, u64)] = &[
    ("ethereum", 1),
    ("base", 8453),
    ("avalanche", 43114),
];

/// Returns the numeric chain id for a registry slug, or `None` if the slug is
/// not an EVM network we know.
pub fn canonical_chain_id(slug: &str) -> Option<u64> {
    CANONICAL_CHAIN_IDS
        .iter()
        .find(|(s, _)| *s == slug)
        .map(|(_, id)| *id)
}

/// Encodes a chain id the way EIP-1193 providers expect it (`0x`-prefixed,
/// lowercase, no padding).
pub fn to_hex_chain_id(chain_id: u64) -> String {
    format!("{chain_id:#x}")
}

/// Parses a chain id returned by a provider.
///
/// Providers are supposed to answer `eth_chainId` with a hex quantity, but a
/// few legacy ones return a decimal string, so both are accepted.
pub fn parse_chain_id(value: &str) -> Result<u64, EthError> {
    let trimmed = value.trim();
    let parsed = match trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
    {
        Some(hex_part) => u64::from_str_radix(hex_part, 16),
        None => trimmed.parse::<u64>(),
    };
    parsed.map_err(|e| EthError::InvalidResponse(format!("bad chain id {value:?}: {e}")))
}

/// Native currency block of the `wallet_addEthereumChain` payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NativeCurrency {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
}

/// EIP-3085 `wallet_addEthereumChain` parameter. Field names are the wire
/// contract with wallet extensions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddEthereumChainParameter {
    pub chain_id: String,
    pub chain_name: String,
    pub native_currency: NativeCurrency,
    pub rpc_urls: Vec<String>,
    pub block_explorer_urls: Vec<String>,
}

impl EvmChain {
    pub fn chain_id_hex(&self) -> String {
        to_hex_chain_id(self.chain_id)
    }

    /// Builds the add-chain payload for this network.
    pub fn add_chain_parameter(&self) -> AddEthereumChainParameter {
        AddEthereumChainParameter {
            chain_id: self.chain_id_hex(),
            chain_name: self.name.to_string(),
            native_currency: NativeCurrency {
                name: self.currency_name.to_string(),
                symbol: self.symbol.to_string(),
                decimals: self.decimals,
            },
            rpc_urls: vec![self.rpc_url.to_string()],
            block_explorer_urls: vec![self.explorer_url.to_string()],
        }
    }
}
