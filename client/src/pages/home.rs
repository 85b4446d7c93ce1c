//! Home page: loads the embedded wallet and mounts the demo.

use leptos::prelude::*;

use crate::components::smart_wallet_demo::SmartWalletDemo;

/// Home page. Shows a placeholder until the embedded wallet is known.
#[component]
pub fn HomePage() -> impl IntoView {
    let wallet = LocalResource::new(|| crate::net::api::fetch_embedded_wallet());

    view! {
        <main class="home-page">
            <h1 class="home-page__title">"Smart Wallet Demo"</h1>
            <Suspense fallback=move || view! { <p class="home-page__status">"Loading wallet..."</p> }>
                {move || {
                    wallet
                        .get()
                        .map(|found| match found {
                            Some(embedded_wallet) => {
                                view! { <SmartWalletDemo embedded_wallet=embedded_wallet/> }.into_any()
                            }
                            None => {
                                view! { <p class="home-page__status">"No embedded wallet available."</p> }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </main>
    }
}
