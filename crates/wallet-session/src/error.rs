use thiserror::Error;

#[derive(Debug, Error)]
pub enum WalletError {
    #[error("Provider unavailable: {0}")]
    ProviderUnavailable(String),

    #[error("No accounts returned by wallet")]
    NoAccounts,

    #[error("Connection rejected: {0}")]
    ConnectionRejected(String),

    #[error("Chain switch failed ({code}): {message}")]
    ChainSwitchFailed { code: i64, message: String },

    #[error("Chain add failed ({code}): {message}")]
    ChainAddFailed { code: i64, message: String },

    #[error("Connection already in progress: {0}")]
    ConnectionInProgress(String),

    #[error("{wallet} cannot connect to {chain}")]
    FamilyMismatch { wallet: String, chain: String },

    #[error("Unsupported chain: {0}")]
    UnsupportedChain(String),

    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    #[error("Balance unavailable: {0}")]
    BalanceUnavailable(String),

    #[error("Provider error: {0}")]
    Provider(String),

    #[error("Wallet not found: {0}")]
    WalletNotFound(String),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<chain_eth::error::EthError> for WalletError {
    fn from(e: chain_eth::error::EthError) -> Self {
        use chain_eth::error::EthError;

        match e {
            EthError::ProviderUnavailable(m) => WalletError::ProviderUnavailable(m),
            EthError::NoAccounts => WalletError::NoAccounts,
            EthError::ChainSwitchFailed { code, message } => {
                WalletError::ChainSwitchFailed { code, message }
            }
            EthError::ChainAddFailed { code, message } => {
                WalletError::ChainAddFailed { code, message }
            }
            EthError::InvalidAddress(m) => WalletError::InvalidAddress(m),
            EthError::UnsupportedChain(m) => WalletError::UnsupportedChain(m),
            other => WalletError::Provider(format!("ETH: {other}")),
        }
    }
}

impl From<chain_sol::error::SolError> for WalletError {
    fn from(e: chain_sol::error::SolError) -> Self {
        use chain_sol::error::SolError;

        match e {
            SolError::ProviderUnavailable(m) => WalletError::ProviderUnavailable(m),
            SolError::ConnectionRejected(m) => WalletError::ConnectionRejected(m),
            SolError::InvalidAddress(m) => WalletError::InvalidAddress(m),
            SolError::BalanceUnavailable(m) => WalletError::BalanceUnavailable(m),
            SolError::Provider(m) => WalletError::Provider(format!("SOL: {m}")),
        }
    }
}
