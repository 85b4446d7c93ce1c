//! Result sections shown after a send attempt.

use alloy_primitives::B256;
use leptos::prelude::*;

/// Where the success message points users next.
pub const KEEP_BUILDING_URL: &str = "https://www.alchemy.com/docs/wallets/react/using-7702";

/// Confirmation with the transaction hash of the sponsored send.
#[component]
pub fn SendSuccess(tx_hash: B256) -> impl IntoView {
    view! {
        <section class="send-outcome send-outcome--success">
            <h2 class="send-outcome__title">"Congrats! Sponsored transaction successful!"</h2>
            <p class="send-outcome__body">
                "You've successfully upgraded your EOA to a smart account and sent your first sponsored transaction. "
                <a href=KEEP_BUILDING_URL class="send-outcome__link" target="_blank" rel="noopener noreferrer">
                    "Keep building"
                </a>
                "."
            </p>
            <p class="send-outcome__body">
                <strong>"Transaction Hash:"</strong>
                " "
                <span class="send-outcome__hash">{tx_hash.to_string()}</span>
            </p>
        </section>
    }
}

/// Generic failure notice shown for every unsuccessful send.
#[component]
pub fn SendFailure() -> impl IntoView {
    view! {
        <section class="send-outcome send-outcome--error">
            <h2 class="send-outcome__title">"Transaction Failed"</h2>
            <p class="send-outcome__body">
                "There was an error sending your sponsored transaction. Please try again."
            </p>
        </section>
    }
}
