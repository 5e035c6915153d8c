//! Faucet Page - request Bwc testnet tokens
//!
//! Binds the faucet contract to the connected account and issues one
//! request_bwc_token call per activation. A failure alerts with the error's
//! message and is logged; a settled request opens the confirmation overlay.

use leptos::prelude::*;

use crate::components::{FaucetRequestButton, FaucetRequestModal};
use crate::services::connect::connected_account;
use crate::services::faucet::{
    send_token_request, FaucetContract, FaucetError, RequestFlow, RequestReceipt,
};
use crate::state::connect::{use_connect_context, ConnectContext};

#[component]
pub fn FaucetPage() -> impl IntoView {
    let connect = use_connect_context();
    let flow = RwSignal::new(RequestFlow::Idle);

    let send_faucet = move || {
        leptos::task::spawn_local(async move {
            match request_for_connected_account(connect).await {
                Ok(receipt) => {
                    log::info!("Faucet request settled: {}", receipt.transaction_hash);
                    flow.set(RequestFlow::Confirming {
                        tx_hash: receipt.transaction_hash,
                    });
                }
                Err(error) => {
                    log::error!("Faucet request failed: {}", error);
                    if let Some(window) = web_sys::window() {
                        window.alert_with_message(error.message()).ok();
                    }
                }
            }
        });
    };

    view! {
        <div class="faucet-page">
            <h1 class="page-title">"Request testnet tokens"</h1>
            <p class="page-description">
                "This faucet sends small amounts of Bwc to an account address on Starknet. "
                "You can use it to pay transaction fees on Starknet."
            </p>
            <p class="page-hint">
                {move || if connect.is_connected() {
                    "Tokens are sent to your connected wallet address."
                } else {
                    "Connect a wallet first so the faucet knows where to send tokens."
                }}
            </p>

            <FaucetRequestButton on_request=Callback::new(move |_| send_faucet())/>

            {move || flow.get().is_confirming().then(|| view! { <FaucetRequestModal flow=flow/> })}
        </div>
    }
}

/// Resolve the connected address and signing account, then run the
/// bind-then-request flow against the deployed faucet contract.
async fn request_for_connected_account(
    connect: ConnectContext,
) -> Result<RequestReceipt, FaucetError> {
    let provider = connect.provider().ok_or_else(FaucetError::not_connected)?;
    let address = connect.address().ok_or_else(FaucetError::not_connected)?;
    let account = connected_account(&provider).ok_or_else(FaucetError::not_connected)?;

    let contract = FaucetContract::new()?;
    send_token_request(&contract, &account, &address).await
}
