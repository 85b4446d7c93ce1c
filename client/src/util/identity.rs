//! Browser access to the identity provider's cookie.

use leptos::prelude::*;

use crate::state::identity::IdentityState;

/// Load the identity token into `identity` once the page is hydrated.
pub fn install_identity_loader(identity: RwSignal<IdentityState>) {
    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        let header = browser_cookie_header().unwrap_or_default();
        identity.set(IdentityState::from_cookie_header(&header));
    });

    #[cfg(not(feature = "hydrate"))]
    let _ = identity;
}

#[cfg(feature = "hydrate")]
fn browser_cookie_header() -> Option<String> {
    use wasm_bindgen::JsCast;

    let document = web_sys::window()?.document()?;
    document.dyn_into::<web_sys::HtmlDocument>().ok()?.cookie().ok()
}
