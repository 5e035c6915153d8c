//! Wallet connection state management

use leptos::prelude::*;

use crate::services::connect::WalletProvider;

/// Connection lifecycle of the injected Starknet wallet.
#[derive(Clone, PartialEq)]
pub enum ConnectionState {
    Disconnected,
    Connecting,
    Connected { address: String, provider: WalletProvider },
    Error(String),
}

impl ConnectionState {
    pub fn is_connected(&self) -> bool {
        matches!(self, ConnectionState::Connected { .. })
    }

    pub fn address(&self) -> Option<&str> {
        match self {
            ConnectionState::Connected { address, .. } => Some(address),
            _ => None,
        }
    }

    pub fn provider(&self) -> Option<WalletProvider> {
        match self {
            ConnectionState::Connected { provider, .. } => Some(provider.clone()),
            _ => None,
        }
    }
}

/// Global connection context
#[derive(Clone, Copy)]
pub struct ConnectContext {
    pub connection: RwSignal<ConnectionState>,
}

impl ConnectContext {
    pub fn new() -> Self {
        Self {
            connection: RwSignal::new(ConnectionState::Disconnected),
        }
    }

    pub fn is_connected(&self) -> bool {
        self.connection.with(|state| state.is_connected())
    }

    pub fn address(&self) -> Option<String> {
        self.connection
            .with(|state| state.address().map(|s| s.to_string()))
    }

    pub fn provider(&self) -> Option<WalletProvider> {
        self.connection.with(|state| state.provider())
    }

    pub fn set_connecting(&self) {
        self.connection.set(ConnectionState::Connecting);
    }

    pub fn set_connected(&self, address: String, provider: WalletProvider) {
        self.connection
            .set(ConnectionState::Connected { address, provider });
    }

    pub fn set_error(&self, error: String) {
        self.connection.set(ConnectionState::Error(error));
    }

    pub fn disconnect(&self) {
        self.connection.set(ConnectionState::Disconnected);
    }
}

pub fn provide_connect_context() -> ConnectContext {
    let context = ConnectContext::new();
    provide_context(context);
    context
}

pub fn use_connect_context() -> ConnectContext {
    expect_context::<ConnectContext>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connected_state_exposes_address_and_provider() {
        let state = ConnectionState::Connected {
            address: "0x123".to_string(),
            provider: WalletProvider::ArgentX,
        };
        assert!(state.is_connected());
        assert_eq!(state.address(), Some("0x123"));
        assert_eq!(state.provider(), Some(WalletProvider::ArgentX));
    }

    #[test]
    fn other_states_expose_nothing() {
        for state in [
            ConnectionState::Disconnected,
            ConnectionState::Connecting,
            ConnectionState::Error("nope".to_string()),
        ] {
            assert!(!state.is_connected());
            assert_eq!(state.address(), None);
            assert_eq!(state.provider(), None);
        }
    }
}
