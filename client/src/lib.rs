//! # smart-wallet-ui
//!
//! Leptos + WASM frontend for the smart-wallet demo: upgrade an embedded EOA
//! to a smart account through EIP-7702 and send one gas-sponsored
//! transaction, plus a panel showing the current identity token.
//!
//! This crate contains the page, components, view-state, REST helpers, and
//! the wallet client boundary (`wallet`). All signing, delegation, batching,
//! and sponsorship happen behind the injected [`wallet::WalletClient`].

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;
pub mod wallet;

/// WASM entry point: hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
