//! Wallet connection over an EIP-1193 style injected provider
//!
//! The provider is an external collaborator. This module only knows the
//! JSON-RPC methods it calls and how to interpret the answers.

mod session_flag;
mod signing;

use std::rc::Rc;

use async_trait::async_trait;
use bookchain_common::Address;
use serde_json::{json, Value};
use thiserror::Error;
use tracing::{error, info, warn};

pub use session_flag::{MemoryFlagStore, SessionFlagStore, WALLET_CONNECTED_KEY};
pub use signing::SigningContext;

/// EIP-1193 code for "the user rejected the request".
pub const USER_REJECTED_CODE: i64 = 4001;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum WalletError {
    #[error("no wallet provider found; install MetaMask or another Ethereum wallet")]
    ProviderUnavailable,
    /// The user declined the provider prompt. Message is the provider's own.
    #[error("{message}")]
    AuthorizationDenied { message: String },
    #[error("wallet returned no accounts")]
    NoAccounts,
    #[error("wallet request failed ({code:?}): {message}")]
    Rpc { code: Option<i64>, message: String },
    #[error("unexpected wallet response: {0}")]
    InvalidResponse(String),
}

impl WalletError {
    /// Classify a provider error by its EIP-1193 code.
    pub fn from_rpc(code: Option<i64>, message: String) -> Self {
        match code {
            Some(USER_REJECTED_CODE) => WalletError::AuthorizationDenied { message },
            _ => WalletError::Rpc { code, message },
        }
    }
}

/// A JSON-RPC endpoint reachable through the injected provider object.
#[async_trait(?Send)]
pub trait WalletProvider {
    async fn request(&self, method: &str, params: Value) -> Result<Value, WalletError>;
}

/// Connects to the user's wallet and tracks the persisted "connected" flag.
///
/// Holds no account itself. The caller owns the session and updates it from
/// the results here.
#[derive(Clone)]
pub struct WalletConnector {
    provider: Option<Rc<dyn WalletProvider>>,
    flags: Rc<dyn SessionFlagStore>,
}

impl WalletConnector {
    pub fn new(provider: Option<Rc<dyn WalletProvider>>, flags: Rc<dyn SessionFlagStore>) -> Self {
        Self { provider, flags }
    }

    pub fn has_provider(&self) -> bool {
        self.provider.is_some()
    }

    fn provider(&self) -> Result<&Rc<dyn WalletProvider>, WalletError> {
        self.provider.as_ref().ok_or(WalletError::ProviderUnavailable)
    }

    /// Ask the wallet for account access and return the first authorized account.
    ///
    /// May open the provider's own prompt.
    pub async fn connect(&self) -> Result<Address, WalletError> {
        let provider = self.provider()?;
        let accounts = provider
            .request("eth_requestAccounts", json!([]))
            .await
            .and_then(first_account);

        match accounts {
            Ok(address) => {
                self.flags.set();
                info!("Wallet connected: {}", address.short());
                Ok(address)
            }
            Err(e) => {
                error!("Error connecting wallet: {e}");
                Err(e)
            }
        }
    }

    /// Forget the local connection. Provider authorization is left alone.
    ///
    /// Guarded on provider presence exactly like [`connect`](Self::connect).
    pub async fn disconnect(&self) -> Result<(), WalletError> {
        self.provider()?;
        self.flags.clear();
        info!("Wallet disconnected");
        Ok(())
    }

    /// Bind a signing handle to the currently authorized account, without prompting.
    pub async fn signing_context(&self) -> Result<SigningContext, WalletError> {
        let provider = self.provider()?;
        let address = provider
            .request("eth_accounts", json!([]))
            .await
            .and_then(first_account)?;
        Ok(SigningContext::new(provider.clone(), address))
    }

    /// Re-establish a previous session on page load.
    ///
    /// Only acts when the "connected" flag survived from an earlier visit.
    /// Never prompts; a wallet that no longer exposes an account clears the flag.
    pub async fn restore(&self) -> Option<Address> {
        if !self.flags.is_set() {
            return None;
        }
        let Ok(provider) = self.provider() else {
            warn!("Wallet flag set but no provider present");
            return None;
        };

        match provider
            .request("eth_accounts", json!([]))
            .await
            .and_then(first_account)
        {
            Ok(address) => {
                info!("Restored wallet session: {}", address.short());
                Some(address)
            }
            Err(e) => {
                warn!("Could not restore wallet session: {e}");
                self.flags.clear();
                None
            }
        }
    }
}

fn first_account(value: Value) -> Result<Address, WalletError> {
    let accounts = value
        .as_array()
        .ok_or_else(|| WalletError::InvalidResponse(format!("expected account list, got {value}")))?;
    let first = accounts.first().ok_or(WalletError::NoAccounts)?;
    first
        .as_str()
        .map(Address::from)
        .ok_or_else(|| WalletError::InvalidResponse(format!("account is not a string: {first}")))
}
