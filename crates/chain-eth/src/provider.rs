//! EIP-1193 provider capability.
//!
//! An injected EVM wallet is reached only through `request`: a method name
//! plus a JSON parameter list, answered by a JSON result or a
//! [`ProviderRpcError`] carrying a numeric code.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// The user rejected the request in the wallet UI.
pub const USER_REJECTED_REQUEST: i64 = 4001;

/// The requested chain has not been added to the wallet (EIP-3326).
pub const UNRECOGNIZED_CHAIN: i64 = 4902;

/// Arguments of a single provider request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestArguments {
    pub method: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<Value>,
}

impl RequestArguments {
    pub fn new(method: &str, params: Option<Value>) -> Self {
        Self {
            method: method.to_string(),
            params,
        }
    }
}

/// Error object returned by a provider for a failed request.
#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
#[error("provider error {code}: {message}")]
pub struct ProviderRpcError {
    pub code: i64,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl ProviderRpcError {
    pub fn new(code: i64, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            data: None,
        }
    }

    pub fn is_unrecognized_chain(&self) -> bool {
        self.code == UNRECOGNIZED_CHAIN
    }

    pub fn is_user_rejection(&self) -> bool {
        self.code == USER_REJECTED_REQUEST
    }
}

/// A live EVM wallet session.
#[async_trait]
pub trait EvmProvider: Send + Sync {
    /// Set by MetaMask on its injected object.
    fn is_meta_mask(&self) -> bool {
        false
    }

    /// Set by the Coinbase Wallet extension on its injected object.
    fn is_coinbase_wallet(&self) -> bool {
        false
    }

    async fn request(&self, args: RequestArguments) -> Result<Value, ProviderRpcError>;
}
