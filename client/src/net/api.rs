//! REST API helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None` since these endpoints are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option` outputs instead of panics so a missing wallet
//! degrades the page without crashing hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::EmbeddedWallet;

/// Same-origin JSON-RPC relay for wallet calls.
pub const WALLET_RPC_ENDPOINT: &str = "/api/wallet/rpc";

/// Embedded wallet lookup.
pub const WALLET_ACCOUNT_ENDPOINT: &str = "/api/wallet/account";

/// Fetch the user's embedded wallet from `/api/wallet/account`.
/// Returns `None` if no wallet is available or on the server.
pub async fn fetch_embedded_wallet() -> Option<EmbeddedWallet> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(WALLET_ACCOUNT_ENDPOINT)
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            log::warn!("{}", account_request_failed_message(resp.status()));
            return None;
        }
        resp.json::<EmbeddedWallet>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
fn account_request_failed_message(status: u16) -> String {
    format!("embedded wallet request failed: {status}")
}
