use thiserror::Error;
use tracing::warn;

pub const ENV_STORAGE_TOKEN: &str = "BOOKCHAIN_WEB3_STORAGE_TOKEN";
pub const ENV_STORAGE_API_URL: &str = "BOOKCHAIN_STORAGE_API_URL";
pub const ENV_GATEWAY_HOST: &str = "BOOKCHAIN_GATEWAY_HOST";
pub const ENV_INDEXER_URL: &str = "BOOKCHAIN_INDEXER_URL";
pub const ENV_CATALOG_LATENCY_MS: &str = "BOOKCHAIN_CATALOG_LATENCY_MS";
pub const ENV_CURRENCY: &str = "BOOKCHAIN_CURRENCY";

const DEFAULT_STORAGE_API_URL: &str = "https://api.web3.storage";
const DEFAULT_GATEWAY_HOST: &str = "ipfs.w3s.link";
const DEFAULT_CATALOG_LATENCY_MS: u64 = 1000;
const DEFAULT_CURRENCY: &str = "MATIC";

/// Configuration errors
#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("invalid value for {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}

/// Application configuration
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// web3.storage API token. Uploads fail with `MissingToken` without it.
    pub storage_token: Option<String>,
    pub storage_api_url: String,
    /// Gateway host that serves `https://<cid>.<host>/<name>`
    pub gateway_host: String,
    /// Indexer endpoint returning a JSON array of books. `None` = sample catalog.
    pub catalog_indexer_url: Option<String>,
    /// Simulated latency of the sample catalog
    pub catalog_latency_ms: u64,
    pub currency_symbol: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage_token: None,
            storage_api_url: DEFAULT_STORAGE_API_URL.to_string(),
            gateway_host: DEFAULT_GATEWAY_HOST.to_string(),
            catalog_indexer_url: None,
            catalog_latency_ms: DEFAULT_CATALOG_LATENCY_MS,
            currency_symbol: DEFAULT_CURRENCY.to_string(),
        }
    }
}

impl Config {
    /// Settings baked in at compile time.
    ///
    /// A browser bundle has no process environment, so the values are captured
    /// from the build environment, the same way bundlers inline `VITE_*` vars.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| build_env(key).map(str::to_string))
    }

    /// Settings from the process environment, loading `.env` first if present.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> Result<Self, ConfigError> {
        if dotenvy::dotenv().is_ok() {
            tracing::info!("Loaded settings from .env");
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let catalog_latency_ms = match get(ENV_CATALOG_LATENCY_MS) {
            Some(raw) => raw.trim().parse().map_err(|e| ConfigError::Invalid {
                key: ENV_CATALOG_LATENCY_MS,
                reason: format!("{raw:?}: {e}"),
            })?,
            None => defaults.catalog_latency_ms,
        };

        let config = Self {
            storage_token: get(ENV_STORAGE_TOKEN),
            storage_api_url: get(ENV_STORAGE_API_URL)
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.storage_api_url),
            gateway_host: get(ENV_GATEWAY_HOST).unwrap_or(defaults.gateway_host),
            catalog_indexer_url: get(ENV_INDEXER_URL),
            catalog_latency_ms,
            currency_symbol: get(ENV_CURRENCY).unwrap_or(defaults.currency_symbol),
        };

        if config.storage_token.is_none() {
            warn!("{ENV_STORAGE_TOKEN} is not set; uploads will fail");
        }

        Ok(config)
    }
}

fn build_env(key: &str) -> Option<&'static str> {
    match key {
        ENV_STORAGE_TOKEN => option_env!("BOOKCHAIN_WEB3_STORAGE_TOKEN"),
        ENV_STORAGE_API_URL => option_env!("BOOKCHAIN_STORAGE_API_URL"),
        ENV_GATEWAY_HOST => option_env!("BOOKCHAIN_GATEWAY_HOST"),
        ENV_INDEXER_URL => option_env!("BOOKCHAIN_INDEXER_URL"),
        ENV_CATALOG_LATENCY_MS => option_env!("BOOKCHAIN_CATALOG_LATENCY_MS"),
        ENV_CURRENCY => option_env!("BOOKCHAIN_CURRENCY"),
        _ => None,
    }
}
