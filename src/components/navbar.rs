//! Navigation Bar - hosts the wallet connect control

use leptos::prelude::*;
use leptos_router::components::A;

use crate::services::connect::{connect_wallet_provider, get_available_wallets, WalletProvider};
use crate::state::connect::use_connect_context;
use crate::utils::format::truncate_address;

#[component]
pub fn Navbar() -> impl IntoView {
    let connect = use_connect_context();

    let connect_wallet = move |_| {
        // Prefer ArgentX when both extensions are installed
        let provider = get_available_wallets()
            .iter()
            .find_map(|w| match w.provider.as_str() {
                "argentx" => Some(WalletProvider::ArgentX),
                "braavos" => Some(WalletProvider::Braavos),
                _ => None,
            })
            .unwrap_or(WalletProvider::ArgentX);

        connect.set_connecting();
        leptos::task::spawn_local(async move {
            match connect_wallet_provider(&provider).await {
                Ok((address, provider)) => {
                    log::info!("{} connected", provider.name());
                    connect.set_connected(address, provider);
                }
                Err(e) => {
                    log::error!("Wallet connection failed: {}", e);
                    connect.set_error(e);
                }
            }
        });
    };

    let disconnect = move |_| connect.disconnect();

    view! {
        <nav>
            <div style="max-width: 1200px; margin: 0 auto; padding: 0 24px; display: flex; justify-content: space-between; align-items: center;">
                <A href="/" attr:class="nav-link-clean">
                    <span class="nav-title">"Bwc Faucet"</span>
                </A>
                {move || if let Some(address) = connect.address() {
                    view! {
                        <button class="btn nav-wallet" on:click=disconnect>
                            {truncate_address(&address)}
                        </button>
                    }.into_any()
                } else {
                    view! {
                        <button class="btn nav-wallet" on:click=connect_wallet>
                            "Connect Wallet"
                        </button>
                    }.into_any()
                }}
            </div>
        </nav>
    }
}
