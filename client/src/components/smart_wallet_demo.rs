//! Upgrade-and-send form for the embedded wallet.
//!
//! SYSTEM CONTEXT
//! ==============
//! Collects a recipient and optional ether value, hands them to the injected
//! wallet client through `submit_sponsored_send`, and renders one of the four
//! send states. The access-token panel sits alongside as an independent
//! action; neither action coordinates with the other.

use leptos::prelude::*;

use crate::components::access_token_panel::AccessTokenPanel;
use crate::components::send_outcome::{SendFailure, SendSuccess};
use crate::net::types::EmbeddedWallet;
use crate::state::send::{SendStatus, submit_disabled, submit_sponsored_send};
use crate::util::smart_wallet::use_smart_embedded_wallet;

/// Smart-wallet demo for one embedded EOA.
#[component]
pub fn SmartWalletDemo(embedded_wallet: EmbeddedWallet) -> impl IntoView {
    let wallet = use_smart_embedded_wallet(&embedded_wallet);
    let from = embedded_wallet.address;

    let status = RwSignal::new(SendStatus::Idle);
    let recipient = RwSignal::new(String::new());
    let value = RwSignal::new(String::new());

    let on_send = move |_| {
        let client = wallet.client();
        let recipient_input = recipient.get_untracked();
        let value_input = value.get_untracked();
        leptos::task::spawn_local(async move {
            submit_sponsored_send(client.as_deref(), from, &recipient_input, &value_input, |next| {
                status.set(next);
            })
            .await;
        });
    };

    view! {
        <div class="smart-wallet">
            <div class="smart-wallet__account">
                <h2 class="smart-wallet__heading">"Embedded EOA Address"</h2>
                <p class="smart-wallet__address">{from.to_string()}</p>
            </div>

            <AccessTokenPanel/>

            <div class="smart-wallet__field">
                <label for="recipient" class="smart-wallet__label">
                    "Recipient Address"
                </label>
                <input
                    id="recipient"
                    class="smart-wallet__input"
                    type="text"
                    placeholder="0x..."
                    prop:value=move || recipient.get()
                    on:input=move |ev| recipient.set(event_target_value(&ev))
                />
            </div>

            <div class="smart-wallet__field">
                <label for="value" class="smart-wallet__label">
                    "Value (ETH) - Optional"
                </label>
                <input
                    id="value"
                    class="smart-wallet__input"
                    type="text"
                    placeholder="0.1"
                    prop:value=move || value.get()
                    on:input=move |ev| value.set(event_target_value(&ev))
                />
            </div>

            <button
                class=move || status.with(SendStatus::button_class)
                disabled=move || submit_disabled(wallet.is_ready(), &status.get())
                on:click=on_send
            >
                {move || status.with(SendStatus::button_label)}
            </button>

            {move || match status.get() {
                SendStatus::Success { tx_hash } => view! { <SendSuccess tx_hash=tx_hash/> }.into_any(),
                SendStatus::Error => view! { <SendFailure/> }.into_any(),
                SendStatus::Idle | SendStatus::Sending => ().into_any(),
            }}
        </div>
    }
}
