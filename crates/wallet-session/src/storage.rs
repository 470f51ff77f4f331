use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use serde::{Deserialize, Serialize};

use crate::config::WalletConfig;
use crate::error::StorageError;
use crate::types::ConnectedWallet;

/// Registry state as written to durable storage.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedState {
    #[serde(default)]
    pub connected_wallets: Vec<ConnectedWallet>,
    #[serde(default)]
    pub active_wallet: Option<ConnectedWallet>,
}

/// On-disk envelope around [`PersistedState`].
#[derive(Debug, Serialize, Deserialize)]
struct Envelope {
    state: PersistedState,
    #[serde(default)]
    version: u32,
}

const STATE_VERSION: u32 = 0;

pub fn encode(state: &PersistedState) -> Result<String, StorageError> {
    let envelope = Envelope {
        state: state.clone(),
        version: STATE_VERSION,
    };
    Ok(serde_json::to_string_pretty(&envelope)?)
}

pub fn decode(json: &str) -> Result<PersistedState, StorageError> {
    let envelope: Envelope = serde_json::from_str(json)?;
    if envelope.version != STATE_VERSION {
        log::warn!(
            "Wallet state has version {}, expected {}",
            envelope.version,
            STATE_VERSION
        );
    }
    Ok(envelope.state)
}

/// Durable home of the registry state.
pub trait StateStore: Send + Sync {
    /// Returns `None` when nothing has been saved yet.
    fn load(&self) -> Result<Option<PersistedState>, StorageError>;

    fn save(&self, state: &PersistedState) -> Result<(), StorageError>;
}

/// JSON file store.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn from_config(config: &WalletConfig) -> Self {
        Self::new(config.storage_path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StateStore for FileStore {
    fn load(&self) -> Result<Option<PersistedState>, StorageError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let contents = fs::read_to_string(&self.path)?;
        Ok(Some(decode(&contents)?))
    }

    fn save(&self, state: &PersistedState) -> Result<(), StorageError> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)?;
        }
        let json = encode(state)?;

        // Write then rename so a crash never leaves a truncated record.
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

/// Keeps the encoded record in memory. Used when persistence is disabled.
#[derive(Debug, Default)]
pub struct MemoryStore {
    record: Mutex<Option<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The last record written, as JSON.
    pub fn raw(&self) -> Option<String> {
        self.record.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

impl StateStore for MemoryStore {
    fn load(&self) -> Result<Option<PersistedState>, StorageError> {
        self.raw().map(|json| decode(&json)).transpose()
    }

    fn save(&self, state: &PersistedState) -> Result<(), StorageError> {
        let json = encode(state)?;
        *self.record.lock().unwrap_or_else(|e| e.into_inner()) = Some(json);
        Ok(())
    }
}
