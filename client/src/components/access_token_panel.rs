//! Panel that copies the identity token into view on demand.

use leptos::prelude::*;

use crate::state::identity::IdentityState;
use crate::state::token::{AccessTokenState, TokenPanel, TokenStatus};

/// "Get Token" button plus the token (or status) it produced.
///
/// Requires a `RwSignal<IdentityState>` in context.
#[component]
pub fn AccessTokenPanel() -> impl IntoView {
    let identity = expect_context::<RwSignal<IdentityState>>();
    let state = RwSignal::new(AccessTokenState::default());

    let loading = move || state.with(|s| s.status == TokenStatus::Loading);

    let on_get_token = move |_| {
        let current = identity.get_untracked();
        state.update(|s| s.refresh_from(&current));
    };

    view! {
        <div class="token-panel">
            <div class="token-panel__header">
                <h3 class="token-panel__title">"Access Token"</h3>
                <button
                    class=move || {
                        if loading() { "token-panel__button token-panel__button--busy" } else { "token-panel__button" }
                    }
                    disabled=loading
                    on:click=on_get_token
                >
                    {move || state.with(|s| s.status.button_label())}
                </button>
            </div>
            <div class="token-panel__body">
                {move || {
                    state
                        .with(|s| match s.panel() {
                            TokenPanel::Loading => {
                                view! { <p class="token-panel__loading">"Getting access token..."</p> }.into_any()
                            }
                            TokenPanel::Failed => {
                                view! { <p class="token-panel__error">"Failed to get access token"</p> }.into_any()
                            }
                            TokenPanel::Token(token) => {
                                let token = token.to_owned();
                                view! { <p class="token-panel__token">{token}</p> }.into_any()
                            }
                            TokenPanel::Hint => {
                                view! {
                                    <p class="token-panel__hint">"Click \"Get Token\" to retrieve access token"</p>
                                }
                                    .into_any()
                            }
                        })
                }}
            </div>
        </div>
    }
}
