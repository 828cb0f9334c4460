//! App-wide services, provided as context by the root component

use std::rc::Rc;

use bookchain_core::catalog::{catalog_source, CatalogSource};
use bookchain_core::config::Config;
use bookchain_core::marketplace::Marketplace;
use bookchain_core::upload::Web3StorageClient;
use bookchain_core::wallet::{WalletConnector, WalletProvider};
use bookchain_ui::stores::WalletSession;
use dioxus::prelude::*;
use tracing::{error, warn};

use crate::ethereum::InjectedProvider;
use crate::storage::LocalStorageFlags;

#[derive(Clone)]
pub struct AppServices {
    pub config: Config,
    pub catalog: Rc<dyn CatalogSource>,
    pub wallet: WalletConnector,
    pub uploader: Rc<Web3StorageClient>,
    pub marketplace: Marketplace,
}

impl AppServices {
    /// Wire services to the browser: baked-in config, `window.ethereum` and localStorage.
    pub fn from_browser() -> Self {
        let config = Config::from_build_env().unwrap_or_else(|e| {
            error!("Invalid configuration, falling back to defaults: {e}");
            Config::default()
        });

        let provider = InjectedProvider::detect().map(|p| Rc::new(p) as Rc<dyn WalletProvider>);
        if provider.is_none() {
            warn!("No injected Ethereum provider found");
        }

        Self {
            catalog: catalog_source(&config),
            wallet: WalletConnector::new(provider, Rc::new(LocalStorageFlags)),
            uploader: Rc::new(Web3StorageClient::from_config(&config)),
            marketplace: Marketplace,
            config,
        }
    }
}

/// Hook to access the app services from components
pub fn use_services() -> AppServices {
    use_context::<AppServices>()
}

/// Hook to access the wallet session shared by every page
pub fn use_wallet_session() -> Store<WalletSession> {
    use_context::<Store<WalletSession>>()
}
