//! Solana wallet connection support.
//!
//! Injected Solana wallets (Phantom, Solflare) expose a `connect()` that
//! resolves to the account's public key. There is no chain negotiation on
//! this side, so the protocol is: acquire, authorize, read balance.
//!
//! Balance lookups go through [`BalanceSource`] so the ledger RPC stays
//! outside this crate.

pub mod address;
pub mod balance;
pub mod connect;
pub mod error;
pub mod provider;
pub mod wallet;

pub use address::{parse_public_key, validate_address};
pub use balance::{format_sol_balance, LAMPORTS_PER_SOL};
pub use connect::{connect_solana, fetch_balance, SolanaConnection};
pub use error::SolError;
pub use provider::{BalanceSource, ConnectResponse, SolanaProvider};
pub use wallet::{InjectedConnector, SolanaConnector, SolanaWallet};
