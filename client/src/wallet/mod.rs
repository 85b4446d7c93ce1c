//! Wallet client boundary.
//!
//! DESIGN
//! ======
//! Signing, EIP-7702 delegation, batching, and gas sponsorship all happen
//! behind [`WalletClient`]. The UI only submits a batch and waits for its
//! status, so the trait carries exactly those two capabilities and any
//! implementation (the JSON-RPC client in [`rpc`], or a test double) can be
//! injected.
//!
//! Futures are `?Send`: the browser runtime is single-threaded and the HTTP
//! transport holds JS handles.

pub mod error;
pub mod rpc;
pub mod send;
pub mod types;
pub mod units;

#[cfg(test)]
pub mod test_helpers;

use async_trait::async_trait;

pub use error::{SendError, WalletError};
pub use types::{CallsStatus, SendCallsParams, SendCallsResult};

/// Capability set the send action needs from a wallet provider.
#[async_trait(?Send)]
pub trait WalletClient {
    /// Submit a batch of calls. Returns the provider-assigned call ids.
    async fn send_calls(&self, params: SendCallsParams) -> Result<SendCallsResult, WalletError>;

    /// Wait until the batch identified by `id` reaches a final status.
    async fn wait_for_calls_status(&self, id: &str) -> Result<CallsStatus, WalletError>;
}
