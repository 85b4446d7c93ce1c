//! Hook wiring the embedded wallet to a smart-account capable client.
//!
//! SYSTEM CONTEXT
//! ==============
//! The wallet client only exists in the browser. During SSR the handle has
//! no client and reports not-ready, which renders the submit control
//! disabled; an effect (browser only) installs the JSON-RPC client after
//! hydration.

use std::rc::Rc;

use leptos::prelude::*;

use crate::net::types::EmbeddedWallet;
use crate::wallet::WalletClient;

/// Reactive handle to the (possibly not yet created) wallet client.
#[derive(Clone, Copy)]
pub struct SmartWalletHandle {
    client: StoredValue<Option<Rc<dyn WalletClient>>, LocalStorage>,
    ready: RwSignal<bool>,
}

impl SmartWalletHandle {
    /// Current client, if one has been installed.
    pub fn client(&self) -> Option<Rc<dyn WalletClient>> {
        self.client.get_value()
    }

    /// Tracked readiness flag for disabling controls.
    pub fn is_ready(&self) -> bool {
        self.ready.get()
    }

    #[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
    fn install(&self, client: Rc<dyn WalletClient>) {
        self.client.set_value(Some(client));
        self.ready.set(true);
    }
}

/// Create the smart-wallet client for `wallet` once running in the browser.
pub fn use_smart_embedded_wallet(wallet: &EmbeddedWallet) -> SmartWalletHandle {
    let handle = SmartWalletHandle { client: StoredValue::new_local(None), ready: RwSignal::new(false) };

    #[cfg(feature = "hydrate")]
    {
        use crate::net::api::WALLET_RPC_ENDPOINT;
        use crate::wallet::rpc::{HttpTransport, RpcWalletClient};

        let address = wallet.address;
        Effect::new(move || {
            let client = RpcWalletClient::new(HttpTransport::new(WALLET_RPC_ENDPOINT));
            handle.install(Rc::new(client));
            log::debug!("smart wallet client ready for {address}");
        });
    }

    #[cfg(not(feature = "hydrate"))]
    {
        let _ = wallet;
    }

    handle
}
