//! Faucet confirmation overlay

use leptos::prelude::*;

use crate::services::faucet::RequestFlow;
use crate::state::connect::use_connect_context;
use crate::utils::format::truncate_address;

/// Overlay shown after a request settles. Dismissing it returns the flow
/// signal to idle.
#[component]
pub fn FaucetRequestModal(flow: RwSignal<RequestFlow>) -> impl IntoView {
    let connect = use_connect_context();

    let recipient = move || {
        connect
            .address()
            .map(|a| truncate_address(&a))
            .unwrap_or_else(|| "your wallet".to_string())
    };
    let tx_hash = move || flow.with(|f| f.tx_hash().unwrap_or_default().to_string());

    view! {
        <div class="modal-backdrop">
            <div class="card modal-card">
                <h2 class="card-title">"Request sent"</h2>
                <p style="color: #cccccc; margin-bottom: 16px;">
                    "The faucet accepted your request. Bwc is on its way to " {recipient} "."
                </p>
                <p style="color: #cccccc; margin-bottom: 8px;">"Transaction hash"</p>
                <p style="font-family: monospace; word-break: break-all; font-size: 0.9em; margin-bottom: 24px;">
                    {tx_hash}
                </p>
                <button class="btn" on:click=move |_| flow.set(RequestFlow::Idle)>
                    "Close"
                </button>
            </div>
        </div>
    }
}
