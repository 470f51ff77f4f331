//! Typed wrappers over the provider methods used by the connect protocol.

use alloy_primitives::U256;
use serde_json::{json, Value};

use crate::chains::{parse_chain_id, to_hex_chain_id, AddEthereumChainParameter};
use crate::error::EthError;
use crate::provider::{EvmProvider, ProviderRpcError, RequestArguments};

pub const ETH_REQUEST_ACCOUNTS: &str = "eth_requestAccounts";
pub const ETH_CHAIN_ID: &str = "eth_chainId";
pub const ETH_GET_BALANCE: &str = "eth_getBalance";
pub const WALLET_SWITCH_ETHEREUM_CHAIN: &str = "wallet_switchEthereumChain";
pub const WALLET_ADD_ETHEREUM_CHAIN: &str = "wallet_addEthereumChain";

fn rpc_error(e: ProviderRpcError) -> EthError {
    EthError::Rpc {
        code: e.code,
        message: e.message,
    }
}

/// Asks the wallet for account access. May wait on a user prompt.
///
/// A rejected prompt and an empty account list both end up as
/// [`EthError::NoAccounts`].
pub async fn request_accounts(provider: &dyn EvmProvider) -> Result<Vec<String>, EthError> {
    let result = provider
        .request(RequestArguments::new(ETH_REQUEST_ACCOUNTS, None))
        .await;

    let value = match result {
        Ok(value) => value,
        Err(e) if e.is_user_rejection() => {
            log::info!("Account access rejected: {}", e.message);
            return Err(EthError::NoAccounts);
        }
        Err(e) => return Err(rpc_error(e)),
    };

    let accounts: Option<Vec<String>> = serde_json::from_value(value)
        .map_err(|e| EthError::InvalidResponse(format!("{ETH_REQUEST_ACCOUNTS}: {e}")))?;
    Ok(accounts.unwrap_or_default())
}

/// Returns the chain the wallet is currently on.
pub async fn chain_id(provider: &dyn EvmProvider) -> Result<u64, EthError> {
    let value = provider
        .request(RequestArguments::new(ETH_CHAIN_ID, None))
        .await
        .map_err(rpc_error)?;

    match &value {
        Value::String(s) => parse_chain_id(s),
        Value::Number(n) => n
            .as_u64()
            .ok_or_else(|| EthError::InvalidResponse(format!("{ETH_CHAIN_ID}: {n}"))),
        other => Err(EthError::InvalidResponse(format!(
            "{ETH_CHAIN_ID}: unexpected {other}"
        ))),
    }
}

/// Requests a chain switch. The raw provider error is returned so the caller
/// can tell an unknown chain apart from other failures.
pub async fn switch_chain(
    provider: &dyn EvmProvider,
    chain_id: u64,
) -> Result<(), ProviderRpcError> {
    provider
        .request(RequestArguments::new(
            WALLET_SWITCH_ETHEREUM_CHAIN,
            Some(json!([{ "chainId": to_hex_chain_id(chain_id) }])),
        ))
        .await
        .map(|_| ())
}

/// Registers a network with the wallet. Wallets switch to a freshly added
/// chain as part of accepting it.
pub async fn add_chain(
    provider: &dyn EvmProvider,
    params: &AddEthereumChainParameter,
) -> Result<(), EthError> {
    let params = serde_json::to_value(params)
        .map_err(|e| EthError::InvalidResponse(format!("{WALLET_ADD_ETHEREUM_CHAIN}: {e}")))?;

    provider
        .request(RequestArguments::new(
            WALLET_ADD_ETHEREUM_CHAIN,
            Some(Value::Array(vec![params])),
        ))
        .await
        .map(|_| ())
        .map_err(|e| EthError::ChainAddFailed {
            code: e.code,
            message: e.message,
        })
}

/// Native balance of `address` at the latest block, in wei.
pub async fn get_balance(provider: &dyn EvmProvider, address: &str) -> Result<U256, EthError> {
    let value = provider
        .request(RequestArguments::new(
            ETH_GET_BALANCE,
            Some(json!([address, "latest"])),
        ))
        .await
        .map_err(rpc_error)?;

    let quantity = value
        .as_str()
        .ok_or_else(|| EthError::InvalidResponse(format!("{ETH_GET_BALANCE}: {value}")))?;
    parse_quantity(quantity)
}

/// Parses a hex QUANTITY (`0x`-prefixed, no leading zeros required).
pub fn parse_quantity(quantity: &str) -> Result<U256, EthError> {
    let digits = quantity
        .strip_prefix("0x")
        .or_else(|| quantity.strip_prefix("0X"))
        .ok_or_else(|| EthError::InvalidResponse(format!("not a hex quantity: {quantity}")))?;

    if digits.is_empty() {
        return Ok(U256::ZERO);
    }

    U256::from_str_radix(digits, 16)
        .map_err(|e| EthError::InvalidResponse(format!("bad quantity {quantity}: {e}")))
}
