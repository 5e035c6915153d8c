//! Bwc Faucet Contract Client
//!
//! Wraps the starknet.js `Contract` object for the deployed faucet and
//! exposes the bind-then-request flow the faucet page runs. The flow is
//! written against [`FaucetClient`] so tests can substitute a recording
//! fake for the JS-backed contract.

use std::future::Future;

use serde::Deserialize;
use thiserror::Error;
use wasm_bindgen::prelude::*;

use crate::services::connect::AccountHandle;
use crate::utils::constants::{BWC_CONTRACT_ADDRESS, BWC_FAUCET_ABI};

/// What went wrong while requesting tokens.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FaucetErrorKind {
    /// No connected wallet address or signing account was available.
    Wallet,
    /// Building the contract client or binding it to the account failed.
    Bind,
    /// The token request call itself was rejected.
    Request,
}

/// Typed failure of the request flow. The message is what the user sees.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("{message}")]
pub struct FaucetError {
    kind: FaucetErrorKind,
    message: String,
}

impl FaucetError {
    pub fn new(kind: FaucetErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn not_connected() -> Self {
        Self::new(
            FaucetErrorKind::Wallet,
            "No wallet connected. Connect a wallet to request tokens.",
        )
    }

    pub fn kind(&self) -> FaucetErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Extract the `message` property of a JS error value.
    fn from_js(kind: FaucetErrorKind, value: JsValue) -> Self {
        let message = js_sys::Reflect::get(&value, &JsValue::from_str("message"))
            .ok()
            .and_then(|m| m.as_string())
            .or_else(|| value.as_string())
            .unwrap_or_else(|| format!("{:?}", value));
        Self::new(kind, message)
    }
}

/// Settlement value of a successful faucet request.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct RequestReceipt {
    pub transaction_hash: String,
}

/// Contract-side collaborator of the request flow.
pub trait FaucetClient {
    type Account;

    /// Bind the client to the signing account. Mutates the client's target,
    /// it does not create a new client.
    fn bind(&self, account: &Self::Account) -> Result<(), FaucetError>;

    /// Invoke the faucet's token request for `recipient`.
    fn request_token(
        &self,
        recipient: &str,
    ) -> impl Future<Output = Result<RequestReceipt, FaucetError>>;
}

/// Bind the client to the account, then issue one token request.
///
/// A bind failure short-circuits: the request is never sent. Each call is
/// independent; overlapping calls are neither queued nor merged.
pub async fn send_token_request<C: FaucetClient>(
    client: &C,
    account: &C::Account,
    recipient: &str,
) -> Result<RequestReceipt, FaucetError> {
    client.bind(account)?;
    client.request_token(recipient).await
}

// ============================================================================
// PRESENTATION STATE
// ============================================================================

/// Two-state machine behind the confirmation overlay: a settled request
/// enters `Confirming`, dismissing the overlay returns to `Idle`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RequestFlow {
    Idle,
    Confirming { tx_hash: String },
}

impl RequestFlow {
    pub fn is_confirming(&self) -> bool {
        matches!(self, RequestFlow::Confirming { .. })
    }

    pub fn tx_hash(&self) -> Option<&str> {
        match self {
            RequestFlow::Confirming { tx_hash } => Some(tx_hash),
            RequestFlow::Idle => None,
        }
    }
}

// ============================================================================
// STARKNET.JS CONTRACT BINDINGS (JavaScript Interop)
// ============================================================================

#[wasm_bindgen(inline_js = "
export function createFaucetContract(abiJson, contractAddress) {
    if (typeof window.starknetJs === 'undefined' || !window.starknetJs.Contract) {
        throw new Error('starknet.js is not loaded');
    }
    const abi = JSON.parse(abiJson);
    return new window.starknetJs.Contract(abi, contractAddress);
}

export function connectContract(contract, account) {
    contract.connect(account);
}

export async function requestBwcToken(contract, recipient) {
    return await contract.request_bwc_token(recipient);
}
")]
extern "C" {
    /// Build a starknet.js Contract for the faucet
    #[wasm_bindgen(catch)]
    fn createFaucetContract(abi_json: &str, contract_address: &str) -> Result<JsValue, JsValue>;

    /// Re-point the contract at a signing account
    #[wasm_bindgen(catch)]
    fn connectContract(contract: &JsValue, account: &JsValue) -> Result<(), JsValue>;

    /// Invoke request_bwc_token on the contract
    #[wasm_bindgen(catch)]
    async fn requestBwcToken(contract: &JsValue, recipient: &str) -> Result<JsValue, JsValue>;
}

/// starknet.js-backed client for the deployed Bwc faucet.
pub struct FaucetContract {
    inner: JsValue,
}

impl FaucetContract {
    pub fn new() -> Result<Self, FaucetError> {
        createFaucetContract(BWC_FAUCET_ABI, BWC_CONTRACT_ADDRESS)
            .map(|inner| Self { inner })
            .map_err(|e| FaucetError::from_js(FaucetErrorKind::Bind, e))
    }
}

impl FaucetClient for FaucetContract {
    type Account = AccountHandle;

    fn bind(&self, account: &AccountHandle) -> Result<(), FaucetError> {
        connectContract(&self.inner, account.as_js())
            .map_err(|e| FaucetError::from_js(FaucetErrorKind::Bind, e))
    }

    async fn request_token(&self, recipient: &str) -> Result<RequestReceipt, FaucetError> {
        let settled = requestBwcToken(&self.inner, recipient)
            .await
            .map_err(|e| FaucetError::from_js(FaucetErrorKind::Request, e))?;

        Ok(serde_wasm_bindgen::from_value(settled).unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::cell::RefCell;

    #[derive(Debug, PartialEq, Eq)]
    enum Call {
        Bind(String),
        Request(String),
    }

    struct FakeClient {
        calls: RefCell<Vec<Call>>,
        bind_error: Option<FaucetError>,
        request_error: Option<FaucetError>,
    }

    impl FakeClient {
        fn ok() -> Self {
            Self {
                calls: RefCell::new(vec![]),
                bind_error: None,
                request_error: None,
            }
        }

        fn failing_bind(message: &str) -> Self {
            Self {
                bind_error: Some(FaucetError::new(FaucetErrorKind::Bind, message)),
                ..Self::ok()
            }
        }

        fn failing_request(message: &str) -> Self {
            Self {
                request_error: Some(FaucetError::new(FaucetErrorKind::Request, message)),
                ..Self::ok()
            }
        }
    }

    impl FaucetClient for FakeClient {
        type Account = String;

        fn bind(&self, account: &String) -> Result<(), FaucetError> {
            self.calls.borrow_mut().push(Call::Bind(account.clone()));
            match &self.bind_error {
                Some(e) => Err(e.clone()),
                None => Ok(()),
            }
        }

        async fn request_token(&self, recipient: &str) -> Result<RequestReceipt, FaucetError> {
            self.calls
                .borrow_mut()
                .push(Call::Request(recipient.to_string()));
            match &self.request_error {
                Some(e) => Err(e.clone()),
                None => Ok(RequestReceipt {
                    transaction_hash: "0xabc".to_string(),
                }),
            }
        }
    }

    #[test]
    fn binds_before_requesting() {
        let client = FakeClient::ok();
        let account = "account-1".to_string();

        let receipt = block_on(send_token_request(&client, &account, "0x123")).unwrap();

        assert_eq!(receipt.transaction_hash, "0xabc");
        assert_eq!(
            *client.calls.borrow(),
            vec![
                Call::Bind("account-1".to_string()),
                Call::Request("0x123".to_string()),
            ]
        );
    }

    #[test]
    fn bind_failure_skips_request() {
        let client = FakeClient::failing_bind("account mismatch");
        let account = "account-1".to_string();

        let err = block_on(send_token_request(&client, &account, "0x123")).unwrap_err();

        assert_eq!(err.kind(), FaucetErrorKind::Bind);
        assert_eq!(err.message(), "account mismatch");
        assert_eq!(
            *client.calls.borrow(),
            vec![Call::Bind("account-1".to_string())]
        );
    }

    #[test]
    fn request_rejection_preserves_message() {
        let client = FakeClient::failing_request("transaction reverted: cooldown active");
        let account = "account-1".to_string();

        let err = block_on(send_token_request(&client, &account, "0x123")).unwrap_err();

        assert_eq!(err.kind(), FaucetErrorKind::Request);
        assert_eq!(err.message(), "transaction reverted: cooldown active");
    }

    #[test]
    fn repeated_requests_run_independently() {
        let client = FakeClient::ok();
        let account = "account-1".to_string();

        block_on(send_token_request(&client, &account, "0x123")).unwrap();
        block_on(send_token_request(&client, &account, "0x123")).unwrap();

        assert_eq!(
            *client.calls.borrow(),
            vec![
                Call::Bind("account-1".to_string()),
                Call::Request("0x123".to_string()),
                Call::Bind("account-1".to_string()),
                Call::Request("0x123".to_string()),
            ]
        );
    }

    #[test]
    fn error_displays_bare_message() {
        let err = FaucetError::new(FaucetErrorKind::Request, "boom");
        assert_eq!(err.to_string(), "boom");
    }

    #[test]
    fn flow_starts_idle_and_confirms_with_hash() {
        assert!(!RequestFlow::Idle.is_confirming());
        assert_eq!(RequestFlow::Idle.tx_hash(), None);

        let confirming = RequestFlow::Confirming {
            tx_hash: "0xabc".to_string(),
        };
        assert!(confirming.is_confirming());
        assert_eq!(confirming.tx_hash(), Some("0xabc"));
    }
}
