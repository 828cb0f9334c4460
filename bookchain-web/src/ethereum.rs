//! `window.ethereum` as a [`WalletProvider`]
//!
//! Requests and responses cross the JS boundary as JSON text.

use async_trait::async_trait;
use bookchain_core::wallet::{WalletError, WalletProvider};
use js_sys::{Function, Object, Promise, Reflect, JSON};
use serde_json::{json, Value};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

/// EIP-1193 provider injected by a browser wallet extension.
pub struct InjectedProvider {
    ethereum: Object,
}

impl InjectedProvider {
    /// `None` when no wallet extension injected `window.ethereum`.
    pub fn detect() -> Option<Self> {
        let window = web_sys::window()?;
        let ethereum = Reflect::get(&window, &JsValue::from_str("ethereum")).ok()?;
        if ethereum.is_undefined() || ethereum.is_null() {
            return None;
        }
        ethereum
            .dyn_into::<Object>()
            .ok()
            .map(|ethereum| Self { ethereum })
    }

    fn request_fn(&self) -> Result<Function, WalletError> {
        Reflect::get(&self.ethereum, &JsValue::from_str("request"))
            .ok()
            .and_then(|f| f.dyn_into::<Function>().ok())
            .ok_or(WalletError::ProviderUnavailable)
    }
}

#[async_trait(?Send)]
impl WalletProvider for InjectedProvider {
    async fn request(&self, method: &str, params: Value) -> Result<Value, WalletError> {
        let args = JSON::parse(&json!({ "method": method, "params": params }).to_string())
            .map_err(|e| WalletError::InvalidResponse(describe(&e)))?;

        let pending = self
            .request_fn()?
            .call1(&self.ethereum, &args)
            .map_err(rpc_error)?;
        let promise = pending
            .dyn_into::<Promise>()
            .map_err(|v| WalletError::InvalidResponse(format!("request did not return a promise: {}", describe(&v))))?;

        let result = JsFuture::from(promise).await.map_err(rpc_error)?;
        if result.is_undefined() {
            return Ok(Value::Null);
        }
        let text: String = JSON::stringify(&result)
            .map_err(|e| WalletError::InvalidResponse(describe(&e)))?
            .into();
        serde_json::from_str(&text).map_err(|e| WalletError::InvalidResponse(e.to_string()))
    }
}

/// Map a rejected provider promise to a [`WalletError`] using its `code` and `message`.
fn rpc_error(err: JsValue) -> WalletError {
    let code = Reflect::get(&err, &JsValue::from_str("code"))
        .ok()
        .and_then(|c| c.as_f64())
        .map(|c| c as i64);
    let message = Reflect::get(&err, &JsValue::from_str("message"))
        .ok()
        .and_then(|m| m.as_string())
        .unwrap_or_else(|| describe(&err));
    WalletError::from_rpc(code, message)
}

fn describe(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}
