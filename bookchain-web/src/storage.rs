//! localStorage-backed wallet flag

use bookchain_core::wallet::{SessionFlagStore, WALLET_CONNECTED_KEY};
use tracing::warn;

fn get_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Keeps the "wallet connected" marker across page loads.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalStorageFlags;

impl SessionFlagStore for LocalStorageFlags {
    fn is_set(&self) -> bool {
        get_storage()
            .and_then(|s| s.get_item(WALLET_CONNECTED_KEY).ok().flatten())
            .is_some_and(|v| v == "true")
    }

    fn set(&self) {
        match get_storage() {
            Some(storage) => {
                if storage.set_item(WALLET_CONNECTED_KEY, "true").is_err() {
                    warn!("Could not persist wallet flag");
                }
            }
            None => warn!("localStorage unavailable, wallet will not reconnect on reload"),
        }
    }

    fn clear(&self) {
        if let Some(storage) = get_storage() {
            let _ = storage.remove_item(WALLET_CONNECTED_KEY);
        }
    }
}
