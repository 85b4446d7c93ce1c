//! Shared application state.
//!
//! `AppState` is injected into Axum handlers via the `State` extractor. The
//! relay is optional: without upstream configuration the wallet routes answer
//! 503 while the page itself still renders.

use std::sync::Arc;

use crate::relay::{SponsorshipPolicy, WalletRelay};

/// Clone is required by Axum; the relay is shared behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub relay: Option<Arc<dyn WalletRelay>>,
    pub sponsorship: SponsorshipPolicy,
}

impl AppState {
    #[must_use]
    pub fn new(relay: Option<Arc<dyn WalletRelay>>, sponsorship: SponsorshipPolicy) -> Self {
        Self { relay, sponsorship }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================
