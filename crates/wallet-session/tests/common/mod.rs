//! Scripted wallet extensions shared by the integration tests.

#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chain_eth::provider::{EvmProvider, ProviderRpcError, RequestArguments, UNRECOGNIZED_CHAIN};
use chain_sol::error::SolError;
use chain_sol::provider::{BalanceSource, ConnectResponse, SolanaProvider};
use serde_json::{json, Value};
use tokio::sync::Notify;

use wallet_session::{InjectedHost, WalletFacade, WalletRegistry};

pub const EVM_ACCOUNT: &str = "0xfb6916095ca1df60bb79ce92ce3ea74c37c5d359";
pub const EVM_ACCOUNT_CHECKSUMMED: &str = "0xfB6916095ca1df60bB79Ce92cE3Ea74c37c5d359";
pub const SOL_ACCOUNT: &str = "TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA";

/// 1.2345 ETH in wei.
pub const BALANCE_1_2345: &str = "0x1121d33597384000";

/// EIP-1193 extension that tracks its own active chain and the networks it
/// knows, like a real browser wallet.
pub struct EvmExtension {
    pub meta_mask: bool,
    pub coinbase: bool,
    pub accounts: Mutex<Vec<String>>,
    pub current_chain: Mutex<String>,
    pub known_chains: Mutex<Vec<String>>,
    pub balance: Mutex<String>,
    pub reject_switch: AtomicBool,
    pub calls: Mutex<Vec<RequestArguments>>,
}

impl EvmExtension {
    pub fn metamask() -> Self {
        Self {
            meta_mask: true,
            coinbase: false,
            accounts: Mutex::new(vec![EVM_ACCOUNT.to_string()]),
            current_chain: Mutex::new("0x1".to_string()),
            known_chains: Mutex::new(vec!["0x1".to_string()]),
            balance: Mutex::new(BALANCE_1_2345.to_string()),
            reject_switch: AtomicBool::new(false),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn methods(&self) -> Vec<String> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .map(|c| c.method.clone())
            .collect()
    }

    pub fn call(&self, method: &str) -> Option<RequestArguments> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.method == method)
            .cloned()
    }

    pub fn set_balance(&self, hex: &str) {
        *self.balance.lock().unwrap() = hex.to_string();
    }
}

fn first_chain_id(params: &Option<Value>) -> String {
    params
        .as_ref()
        .and_then(|p| p[0]["chainId"].as_str())
        .unwrap_or_default()
        .to_string()
}

#[async_trait]
impl EvmProvider for EvmExtension {
    fn is_meta_mask(&self) -> bool {
        self.meta_mask
    }

    fn is_coinbase_wallet(&self) -> bool {
        self.coinbase
    }

    async fn request(&self, args: RequestArguments) -> Result<Value, ProviderRpcError> {
        self.calls.lock().unwrap().push(args.clone());
        match args.method.as_str() {
            "eth_requestAccounts" => Ok(json!(*self.accounts.lock().unwrap())),
            "eth_chainId" => Ok(json!(*self.current_chain.lock().unwrap())),
            "wallet_switchEthereumChain" => {
                if self.reject_switch.load(Ordering::SeqCst) {
                    return Err(ProviderRpcError::new(4001, "User rejected the request."));
                }
                let target = first_chain_id(&args.params);
                if !self.known_chains.lock().unwrap().contains(&target) {
                    return Err(ProviderRpcError::new(
                        UNRECOGNIZED_CHAIN,
                        format!("Unrecognized chain ID \"{target}\"."),
                    ));
                }
                *self.current_chain.lock().unwrap() = target;
                Ok(Value::Null)
            }
            "wallet_addEthereumChain" => {
                let target = first_chain_id(&args.params);
                self.known_chains.lock().unwrap().push(target.clone());
                *self.current_chain.lock().unwrap() = target;
                Ok(Value::Null)
            }
            "eth_getBalance" => Ok(json!(*self.balance.lock().unwrap())),
            other => Err(ProviderRpcError::new(4200, format!("{other} unsupported"))),
        }
    }
}

/// Phantom or Solflare extension.
pub struct SolExtension {
    pub phantom: bool,
    pub solflare: bool,
    pub key: Option<String>,
    /// When set, `connect` waits for a permit, like a pending approval prompt.
    pub approval: Option<Arc<Notify>>,
    pub fail_disconnect: bool,
    pub disconnects: AtomicUsize,
}

impl SolExtension {
    pub fn phantom() -> Self {
        Self {
            phantom: true,
            solflare: false,
            key: Some(SOL_ACCOUNT.to_string()),
            approval: None,
            fail_disconnect: false,
            disconnects: AtomicUsize::new(0),
        }
    }

    pub fn disconnects(&self) -> usize {
        self.disconnects.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SolanaProvider for SolExtension {
    fn is_phantom(&self) -> bool {
        self.phantom
    }

    fn is_solflare(&self) -> bool {
        self.solflare
    }

    async fn connect(&self) -> Result<ConnectResponse, SolError> {
        if let Some(approval) = &self.approval {
            approval.notified().await;
        }
        Ok(ConnectResponse {
            public_key: self.key.clone(),
        })
    }

    async fn disconnect(&self) -> Result<(), SolError> {
        self.disconnects.fetch_add(1, Ordering::SeqCst);
        if self.fail_disconnect {
            return Err(SolError::Provider("wallet locked".into()));
        }
        Ok(())
    }
}

/// Ledger returning one balance for every account.
pub struct Ledger {
    pub lamports: AtomicU64,
}

impl Ledger {
    pub fn new(lamports: u64) -> Self {
        Self {
            lamports: AtomicU64::new(lamports),
        }
    }
}

#[async_trait]
impl BalanceSource for Ledger {
    async fn get_balance(&self, _address: &str) -> Result<u64, SolError> {
        Ok(self.lamports.load(Ordering::SeqCst))
    }
}

/// A host with MetaMask and Phantom installed.
pub struct Fixture {
    pub host: Arc<InjectedHost>,
    pub metamask: Arc<EvmExtension>,
    pub phantom: Arc<SolExtension>,
    pub ledger: Arc<Ledger>,
}

impl Fixture {
    pub fn new() -> Self {
        Self::with(EvmExtension::metamask(), SolExtension::phantom())
    }

    pub fn with(metamask: EvmExtension, phantom: SolExtension) -> Self {
        let metamask = Arc::new(metamask);
        let phantom = Arc::new(phantom);
        let host = Arc::new(InjectedHost::new());
        host.inject_ethereum(Some(metamask.clone()));
        host.inject_solana(Some(phantom.clone()));
        Self {
            host,
            metamask,
            phantom,
            ledger: Arc::new(Ledger::new(3_000_000_000)),
        }
    }

    pub fn facade(&self, registry: Arc<WalletRegistry>) -> WalletFacade {
        WalletFacade::new(registry, self.host.clone(), self.ledger.clone())
    }

    pub fn in_memory(&self) -> WalletFacade {
        self.facade(Arc::new(WalletRegistry::in_memory()))
    }
}
