use thiserror::Error;

/// Solana connection and provider errors.
#[derive(Debug, Error)]
pub enum SolError {
    #[error("provider unavailable: {0}")]
    ProviderUnavailable(String),

    #[error("connection rejected: {0}")]
    ConnectionRejected(String),

    #[error("invalid address: {0}")]
    InvalidAddress(String),

    #[error("balance unavailable: {0}")]
    BalanceUnavailable(String),

    #[error("provider error: {0}")]
    Provider(String),
}
