//! Send-status state for the sponsored transaction form.
//!
//! SYSTEM CONTEXT
//! ==============
//! Written only by the send action. Each submission starts from `Sending`, so
//! the status always reflects the most recent attempt.

#[cfg(test)]
#[path = "send_test.rs"]
mod send_test;

use alloy_primitives::{Address, B256};

use crate::wallet::WalletClient;
use crate::wallet::send::delegate_and_send;

/// Status of the most recent send attempt.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SendStatus {
    #[default]
    Idle,
    Sending,
    Success {
        tx_hash: B256,
    },
    Error,
}

impl SendStatus {
    #[must_use]
    pub fn is_sending(&self) -> bool {
        matches!(self, Self::Sending)
    }

    /// Label for the submit button.
    #[must_use]
    pub fn button_label(&self) -> &'static str {
        if self.is_sending() { "Sending..." } else { "Upgrade & Send Sponsored Transaction" }
    }

    /// Modifier class for the submit button.
    #[must_use]
    pub fn button_class(&self) -> &'static str {
        if self.is_sending() { "send-button send-button--busy" } else { "send-button" }
    }
}

/// The submit control is disabled while no client is ready or a send is in
/// flight. This is the only guard against double submission.
#[must_use]
pub fn submit_disabled(client_ready: bool, status: &SendStatus) -> bool {
    !client_ready || status.is_sending()
}

/// Run one sponsored send and publish every status transition to `publish`.
///
/// Without a client nothing happens. An empty recipient publishes `Error`
/// without touching the client. Otherwise `Sending` is published first and
/// the outcome of [`delegate_and_send`] second; failures are logged.
pub async fn submit_sponsored_send(
    client: Option<&dyn WalletClient>,
    from: Address,
    recipient: &str,
    value: &str,
    publish: impl Fn(SendStatus),
) {
    let Some(client) = client else {
        return;
    };
    if recipient.is_empty() {
        publish(SendStatus::Error);
        return;
    }

    publish(SendStatus::Sending);
    match delegate_and_send(Some(client), from, recipient, value).await {
        Ok(tx_hash) => {
            log::info!("sponsored transaction confirmed: {tx_hash}");
            publish(SendStatus::Success { tx_hash });
        }
        Err(e) => {
            log::error!("Transaction failed: {e}");
            publish(SendStatus::Error);
        }
    }
}
