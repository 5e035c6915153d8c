//! Faucet request trigger

use leptos::prelude::*;

/// Call-to-action card for the faucet.
///
/// Purely presentational: invokes `on_request` on every click and consumes
/// no result. Activation is never debounced or suppressed here.
#[component]
pub fn FaucetRequestButton(on_request: Callback<()>) -> impl IntoView {
    view! {
        <div class="card faucet-request">
            <button class="btn" on:click=move |_| on_request.run(())>
                "Send request"
            </button>
        </div>
    }
}
