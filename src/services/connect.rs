//! Starknet Wallet Integration via wasm-bindgen
//!
//! JavaScript interop for the injected Starknet wallet extensions.
//! Supports ArgentX and Braavos.

use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

/// Supported wallet provider types
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WalletProvider {
    ArgentX,
    Braavos,
}

impl WalletProvider {
    pub fn name(&self) -> &'static str {
        match self {
            WalletProvider::ArgentX => "ArgentX",
            WalletProvider::Braavos => "Braavos",
        }
    }

    /// Key of the injected wallet object on `window`.
    fn key(&self) -> &'static str {
        match self {
            WalletProvider::ArgentX => "argentX",
            WalletProvider::Braavos => "braavos",
        }
    }
}

// ============================================================================
// WALLET DETECTION AND CONNECTION (JavaScript Interop)
// ============================================================================

#[wasm_bindgen(inline_js = "
export function detectStarknetWallets() {
    const wallets = [];

    if (window.starknet_argentX) {
        wallets.push({ name: 'ArgentX', provider: 'argentx', installed: true });
    }

    if (window.starknet_braavos) {
        wallets.push({ name: 'Braavos', provider: 'braavos', installed: true });
    }

    return wallets;
}

export function getStarknetWallet(provider) {
    switch (provider) {
        case 'argentX':
            return window.starknet_argentX || null;
        case 'braavos':
            return window.starknet_braavos || null;
        default:
            return window.starknet || null;
    }
}

export async function enableStarknetWallet(provider) {
    const wallet = getStarknetWallet(provider);
    if (!wallet) {
        throw new Error(provider + ' wallet not found. Please install the extension.');
    }

    try {
        await wallet.enable();

        if (!wallet.isConnected || !wallet.selectedAddress) {
            throw new Error('Wallet did not authorize the connection');
        }

        return {
            address: wallet.selectedAddress,
            provider: provider
        };
    } catch (error) {
        const errorMsg = error.message || String(error);
        throw new Error('Failed to connect to ' + provider + ': ' + errorMsg);
    }
}

export function getStarknetAccount(provider) {
    const wallet = getStarknetWallet(provider);
    if (!wallet || !wallet.isConnected || !wallet.account) {
        return null;
    }
    return wallet.account;
}
")]
extern "C" {
    /// Detect all installed Starknet wallets
    fn detectStarknetWallets() -> JsValue;

    /// Connect to a specific wallet provider
    #[wasm_bindgen(catch)]
    async fn enableStarknetWallet(provider: &str) -> Result<JsValue, JsValue>;

    /// Get the signing account object from a connected wallet
    fn getStarknetAccount(provider: &str) -> JsValue;
}

// ============================================================================
// WALLET SERVICE
// ============================================================================

/// Detected wallet information
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DetectedWallet {
    pub name: String,
    pub provider: String,
    pub installed: bool,
}

/// Session/signing handle of a connected wallet account.
///
/// Opaque to Rust; handed back to the contract client for binding.
pub struct AccountHandle(JsValue);

impl AccountHandle {
    pub fn as_js(&self) -> &JsValue {
        &self.0
    }
}

/// Get list of available wallets
pub fn get_available_wallets() -> Vec<DetectedWallet> {
    let wallets_js = detectStarknetWallets();
    serde_wasm_bindgen::from_value(wallets_js).unwrap_or_else(|_| vec![])
}

/// Connect to a wallet provider
pub async fn connect_wallet_provider(
    provider: &WalletProvider,
) -> Result<(String, WalletProvider), String> {
    match enableStarknetWallet(provider.key()).await {
        Ok(result) => {
            let addr_val = js_sys::Reflect::get(&result, &JsValue::from_str("address"))
                .map_err(|_| "Failed to get address from result".to_string())?;

            let address = addr_val
                .as_string()
                .ok_or_else(|| "Address is not a string".to_string())?;

            Ok((address, provider.clone()))
        }
        Err(e) => {
            let error_msg = if let Some(err_str) = e.as_string() {
                err_str
            } else {
                format!("Connection error: {:?}", e)
            };
            Err(error_msg)
        }
    }
}

/// Get the signing account from a connected wallet
pub fn connected_account(provider: &WalletProvider) -> Option<AccountHandle> {
    let account = getStarknetAccount(provider.key());
    if account.is_null() || account.is_undefined() {
        None
    } else {
        Some(AccountHandle(account))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_names() {
        assert_eq!(WalletProvider::ArgentX.name(), "ArgentX");
        assert_eq!(WalletProvider::Braavos.name(), "Braavos");
    }

    #[test]
    fn provider_serializes_lowercase() {
        let json = serde_json::to_string(&WalletProvider::ArgentX).unwrap();
        assert_eq!(json, "\"argentx\"");
        let back: WalletProvider = serde_json::from_str(&json).unwrap();
        assert_eq!(back, WalletProvider::ArgentX);
    }
}
