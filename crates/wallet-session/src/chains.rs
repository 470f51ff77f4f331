//! Static catalog of the chains a wallet can be connected on.

use serde::Serialize;

use chain_eth::chains::{canonical_chain_id, EvmChain};

use crate::error::WalletError;

/// Wallet protocol family a chain belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ChainFamily {
    /// EIP-1193 providers with chain switching.
    Evm,
    /// Account-model wallets exposing `connect()`.
    Solana,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NativeCurrency {
    pub name: &'static str,
    pub symbol: &'static str,
    pub decimals: u8,
}

/// Static chain descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Chain {
    /// Unique slug, also used as the wallet's `chainId`.
    pub id: &'static str,
    pub name: &'static str,
    pub symbol: &'static str,
    /// UI color token.
    pub color: &'static str,
    pub icon: &'static str,
    pub rpc_url: &'static str,
    pub block_explorer_url: &'static str,
    pub native_currency: NativeCurrency,
    pub family: ChainFamily,
}

pub const ETHEREUM: Chain = Chain {
    id: "ethereum",
    name: "Ethereum",
    symbol: "ETH",
    color: "bg-blue-500",
    icon: "⟠",
    rpc_url: "https://mainnet.infura.io/v3/",
    block_explorer_url: "https://etherscan.io",
    native_currency: NativeCurrency {
        name: "Ethereum",
        symbol: "ETH",
        decimals: 18,
    },
    family: ChainFamily::Evm,
};

pub const BASE: Chain = Chain {
    id: "base",
    name: "Base",
    symbol: "ETH",
    color: "bg-blue-600",
    icon: "🔵",
    rpc_url: "https://mainnet.base.org",
    block_explorer_url: "https://basescan.org",
    native_currency: NativeCurrency {
        name: "Ethereum",
        symbol: "ETH",
        decimals: 18,
    },
    family: ChainFamily::Evm,
};

pub const AVALANCHE: Chain = Chain {
    id: "avalanche",
    name: "Avalanche",
    symbol: "AVAX",
    color: "bg-red-500",
    icon: "▲",
    rpc_url: "https://api.avax.network/ext/bc/C/rpc",
    block_explorer_url: "https://snowtrace.io",
    native_currency: NativeCurrency {
        name: "Avalanche",
        symbol: "AVAX",
        decimals: 18,
    },
    family: ChainFamily::Evm,
};

pub const SOLANA: Chain = Chain {
    id: "solana",
    name: "Solana",
    symbol: "SOL",
    color: "bg-purple-500",
    icon: "◎",
    rpc_url: "https://api.mainnet-beta.solana.com",
    block_explorer_url: "https://solscan.io",
    native_currency: NativeCurrency {
        name: "Solana",
        symbol: "SOL",
        decimals: 9,
    },
    family: ChainFamily::Solana,
};

/// All supported chains, in display order.
const SUPPORTED_CHAINS: &[&Chain] = &[&ETHEREUM, &BASE, &AVALANCHE, &SOLANA];

/// Returns every supported chain in display order.
pub fn list_chains() -> Vec<&'static Chain> {
    SUPPORTED_CHAINS.to_vec()
}

/// Returns the chain with the given slug, or `None` if unsupported.
pub fn find_chain(id: &str) -> Option<&'static Chain> {
    SUPPORTED_CHAINS.iter().find(|c| c.id == id).copied()
}

impl Chain {
    pub fn is_evm(&self) -> bool {
        self.family == ChainFamily::Evm
    }

    /// Network parameters for the EVM connect protocol.
    pub fn evm_network(&self) -> Result<EvmChain, WalletError> {
        let chain_id = match self.family {
            ChainFamily::Evm => canonical_chain_id(self.id),
            ChainFamily::Solana => None,
        }
        .ok_or_else(|| WalletError::UnsupportedChain(self.id.to_string()))?;

        Ok(EvmChain {
            chain_id,
            name: self.name,
            currency_name: self.native_currency.name,
            symbol: self.native_currency.symbol,
            decimals: self.native_currency.decimals,
            rpc_url: self.rpc_url,
            explorer_url: self.block_explorer_url,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_chains_in_display_order() {
        let ids: Vec<_> = list_chains().iter().map(|c| c.id).collect();
        assert_eq!(ids, vec!["ethereum", "base", "avalanche", "solana"]);
    }

    #[test]
    fn find_known_and_unknown() {
        assert_eq!(find_chain("base").unwrap().name, "Base");
        assert_eq!(find_chain("solana").unwrap().native_currency.decimals, 9);
        assert!(find_chain("polygon").is_none());
        assert!(find_chain("").is_none());
    }

    #[test]
    fn ids_are_unique() {
        let chains = list_chains();
        for (i, a) in chains.iter().enumerate() {
            for b in &chains[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn every_evm_chain_has_a_canonical_id() {
        for chain in list_chains().into_iter().filter(|c| c.is_evm()) {
            assert!(
                chain.evm_network().is_ok(),
                "{} should map to an EVM chain id",
                chain.id
            );
        }
    }

    #[test]
    fn evm_network_carries_registry_metadata() {
        let network = AVALANCHE.evm_network().unwrap();
        assert_eq!(network.chain_id, 43114);
        assert_eq!(network.chain_id_hex(), "0xa86a");
        assert_eq!(network.name, "Avalanche");
        assert_eq!(network.symbol, "AVAX");
        assert_eq!(network.explorer_url, "https://snowtrace.io");
    }

    #[test]
    fn solana_has_no_evm_network() {
        assert!(matches!(
            SOLANA.evm_network(),
            Err(WalletError::UnsupportedChain(_))
        ));
    }

    #[test]
    fn all_chains_have_https_urls() {
        for chain in list_chains() {
            assert!(chain.rpc_url.starts_with("https://"), "{}", chain.id);
            assert!(chain.block_explorer_url.starts_with("https://"), "{}", chain.id);
        }
    }
}
