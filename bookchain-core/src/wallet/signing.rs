use std::fmt;
use std::rc::Rc;

use bookchain_common::Address;
use serde_json::json;

use super::{WalletError, WalletProvider};

/// Handle for signing on behalf of one authorized account.
#[derive(Clone)]
pub struct SigningContext {
    provider: Rc<dyn WalletProvider>,
    address: Address,
}

impl fmt::Debug for SigningContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SigningContext")
            .field("address", &self.address)
            .finish_non_exhaustive()
    }
}

impl SigningContext {
    pub(super) fn new(provider: Rc<dyn WalletProvider>, address: Address) -> Self {
        Self { provider, address }
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    /// `personal_sign` a UTF-8 message. Returns the signature as the wallet
    /// formats it (0x-prefixed hex).
    pub async fn sign_message(&self, message: &str) -> Result<String, WalletError> {
        let payload = format!("0x{}", hex::encode(message.as_bytes()));
        let signature = self
            .provider
            .request("personal_sign", json!([payload, self.address.as_str()]))
            .await?;

        signature
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| WalletError::InvalidResponse(format!("signature is not a string: {signature}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wallet::test_support::ScriptedProvider;

    #[tokio::test]
    async fn sign_message_sends_hex_payload_and_address() {
        let provider = ScriptedProvider::new(vec![Ok(json!("0xsig"))]);
        let signer = SigningContext::new(provider.clone(), Address::new("0xAbC"));

        let signature = signer.sign_message("hi").await.unwrap();

        assert_eq!(signature, "0xsig");
        let calls = provider.calls.borrow();
        assert_eq!(calls[0].0, "personal_sign");
        assert_eq!(calls[0].1, json!(["0x6869", "0xAbC"]));
    }

    #[tokio::test]
    async fn rejected_signature_propagates_unchanged() {
        let provider = ScriptedProvider::new(vec![Err(WalletError::AuthorizationDenied {
            message: "denied".to_string(),
        })]);
        let signer = SigningContext::new(provider, Address::new("0x1"));

        assert_eq!(
            signer.sign_message("x").await,
            Err(WalletError::AuthorizationDenied {
                message: "denied".to_string()
            })
        );
    }
}
