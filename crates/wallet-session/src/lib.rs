//! Multi-wallet, multi-chain connection layer.
//!
//! This crate provides:
//! - The static chain catalog and its chain families
//! - Detection of injected EVM and Solana wallets
//! - Family dispatch over the connect protocols, one attempt at a time
//! - The connected-wallet registry with its single active wallet and
//!   durable storage
//! - A facade deriving connection state for consumers

pub mod chains;
pub mod config;
pub mod detector;
pub mod error;
pub mod facade;
pub mod host;
pub mod negotiator;
pub mod provider;
pub mod registry;
pub mod storage;
pub mod types;

pub use chains::{find_chain, list_chains, Chain, ChainFamily};
pub use config::WalletConfig;
pub use detector::{ProviderDetector, WalletProviderDescriptor};
pub use error::{StorageError, WalletError};
pub use facade::{format_address, WalletFacade};
pub use host::{Headless, HostEnvironment, InjectedHost, InjectedProviders};
pub use negotiator::{ConnectionResult, Negotiator};
pub use provider::ProviderHandle;
pub use registry::WalletRegistry;
pub use storage::{FileStore, MemoryStore, PersistedState, StateStore};
pub use types::{wallet_id, ConnectedWallet, NewWallet};
