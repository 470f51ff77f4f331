use thiserror::Error;

/// EVM connection and provider errors.
#[derive(Debug, Error)]
pub enum EthError {
    #[error("provider unavailable: {0}")]
    ProviderUnavailable(String),

    #[error("no accounts returned by provider")]
    NoAccounts,

    #[error("chain switch failed ({code}): {message}")]
    ChainSwitchFailed { code: i64, message: String },

    #[error("chain add failed ({code}): {message}")]
    ChainAddFailed { code: i64, message: String },

    #[error("rpc error ({code}): {message}")]
    Rpc { code: i64, message: String },

    #[error("invalid address: {0}")]
    InvalidAddress(String),

    #[error("invalid provider response: {0}")]
    InvalidResponse(String),

    #[error("unsupported chain: {0}")]
    UnsupportedChain(String),
}
