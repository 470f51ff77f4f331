//! Ethereum/EVM wallet connection support.
//!
//! This crate provides:
//! - The EIP-1193 provider capability and typed wrappers over its RPC methods
//! - The connect protocol (account access, chain switch/add, balance read)
//! - Canonical chain ids and the EIP-3085 add-chain payload
//! - EIP-55 address validation and checksumming
//! - Wei to display-unit balance formatting

pub mod address;
pub mod balance;
pub mod chains;
pub mod connect;
pub mod error;
pub mod provider;
pub mod rpc;
pub mod wallet;

pub use chains::{canonical_chain_id, AddEthereumChainParameter, EvmChain, NativeCurrency};
pub use connect::{connect_evm, ensure_chain, fetch_balance, EvmConnection};
pub use error::EthError;
pub use provider::{EvmProvider, ProviderRpcError, RequestArguments, UNRECOGNIZED_CHAIN};
pub use wallet::{EvmConnector, EvmWallet, InjectedConnector, WalletConnectConnector};
