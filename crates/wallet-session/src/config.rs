/// Wallet session configuration from environment variables
///
/// Controls where the connected-wallet record is persisted.
use std::env;
use std::path::PathBuf;

pub const DEFAULT_STORAGE_DIR: &str = "./wallet-data";
pub const DEFAULT_STORAGE_KEY: &str = "wallet-storage";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WalletConfig {
    /// Directory holding the persisted record
    pub storage_dir: PathBuf,
    /// Record name; the file is `<storage_dir>/<storage_key>.json`
    pub storage_key: String,
    /// When false the registry lives in memory only
    pub persist: bool,
}

impl WalletConfig {
    /// Load configuration from environment variables
    ///
    /// Environment variables:
    /// - `WALLET_STORAGE_DIR`: record directory (default `./wallet-data`)
    /// - `WALLET_STORAGE_KEY`: record name (default `wallet-storage`)
    /// - `WALLET_PERSIST`: `false` or `0` keeps state in memory only
    pub fn from_env() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Same as [`WalletConfig::from_env`] with an explicit variable lookup.
    pub fn from_vars<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let storage_dir = lookup("WALLET_STORAGE_DIR")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STORAGE_DIR));

        let storage_key = lookup("WALLET_STORAGE_KEY")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_STORAGE_KEY.to_string());

        let persist = match lookup("WALLET_PERSIST").map(|v| v.trim().to_lowercase()) {
            None => true,
            Some(v) if v == "false" || v == "0" || v == "no" => false,
            Some(v) if v == "true" || v == "1" || v == "yes" || v.is_empty() => true,
            Some(other) => {
                log::warn!("Unknown WALLET_PERSIST value '{}', persisting", other);
                true
            }
        };

        if persist {
            log::info!(
                "Wallet state persisted to {}",
                storage_dir.join(format!("{storage_key}.json")).display()
            );
        } else {
            log::info!("Wallet state persistence disabled");
        }

        Self {
            storage_dir,
            storage_key,
            persist,
        }
    }

    /// Full path of the persisted record.
    pub fn storage_path(&self) -> PathBuf {
        self.storage_dir.join(format!("{}.json", self.storage_key))
    }
}

impl Default for WalletConfig {
    fn default() -> Self {
        Self {
            storage_dir: PathBuf::from(DEFAULT_STORAGE_DIR),
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            persist: true,
        }
    }
}
