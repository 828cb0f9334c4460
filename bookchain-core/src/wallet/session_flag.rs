use std::cell::Cell;

/// Storage key for the "wallet was connected" marker.
pub const WALLET_CONNECTED_KEY: &str = "walletConnected";

/// Where the "wallet was connected" marker lives between page loads.
pub trait SessionFlagStore {
    fn is_set(&self) -> bool;
    fn set(&self);
    fn clear(&self);
}

/// Flag store that lives only as long as the process. Used natively and in tests.
#[derive(Debug, Default)]
pub struct MemoryFlagStore {
    flag: Cell<bool>,
}

impl SessionFlagStore for MemoryFlagStore {
    fn is_set(&self) -> bool {
        self.flag.get()
    }

    fn set(&self) {
        self.flag.set(true);
    }

    fn clear(&self) {
        self.flag.set(false);
    }
}
