//! JSON-RPC wallet client.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser never talks to the wallet provider directly. Requests go to
//! the same-origin relay (`/api/wallet/rpc`), which holds the provider key
//! and attaches the sponsorship policy. This module only frames JSON-RPC 2.0
//! envelopes, decodes results, and polls batch status.

#[cfg(test)]
#[path = "rpc_test.rs"]
mod rpc_test;

use std::cell::Cell;
use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::WalletClient;
use super::error::WalletError;
use super::types::{CallsStatus, SendCallsParams, SendCallsResult};

pub const METHOD_SEND_CALLS: &str = "wallet_sendCalls";
pub const METHOD_GET_CALLS_STATUS: &str = "wallet_getCallsStatus";

pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(1);
pub const DEFAULT_POLL_ATTEMPTS: u32 = 60;

// =============================================================================
// TRANSPORT
// =============================================================================

/// Moves one JSON-RPC envelope to the provider and back.
#[async_trait(?Send)]
pub trait RpcTransport {
    async fn call(&self, request: Value) -> Result<Value, WalletError>;
}

/// Same-origin HTTP transport backed by `gloo-net`.
#[cfg(feature = "hydrate")]
pub struct HttpTransport {
    endpoint: String,
}

#[cfg(feature = "hydrate")]
impl HttpTransport {
    #[must_use]
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self { endpoint: endpoint.into() }
    }
}

#[cfg(feature = "hydrate")]
#[async_trait(?Send)]
impl RpcTransport for HttpTransport {
    async fn call(&self, request: Value) -> Result<Value, WalletError> {
        let resp = gloo_net::http::Request::post(&self.endpoint)
            .json(&request)
            .map_err(|e| WalletError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| WalletError::Transport(e.to_string()))?;
        let ok = resp.ok();
        let status = resp.status();
        let body = resp.json::<Value>().await.map_err(|e| e.to_string());
        classify_relay_response(ok, status, body)
    }
}

/// Decide what an HTTP answer from the relay means.
///
/// Error bodies carrying a JSON-RPC `error` object are passed through so the
/// caller sees the provider's code and message instead of a bare status.
///
/// # Errors
///
/// Returns [`WalletError::HttpStatus`] for failed requests without an RPC
/// error body and [`WalletError::Decode`] for unparsable success bodies.
pub fn classify_relay_response(ok: bool, status: u16, body: Result<Value, String>) -> Result<Value, WalletError> {
    match body {
        Ok(value) if ok || value.get("error").is_some() => Ok(value),
        Ok(_) => Err(WalletError::HttpStatus { status }),
        Err(e) if ok => Err(WalletError::Decode(e)),
        Err(_) => Err(WalletError::HttpStatus { status }),
    }
}

// =============================================================================
// ENVELOPES
// =============================================================================

#[derive(serde::Deserialize)]
struct RpcEnvelope {
    #[serde(default)]
    result: Option<Value>,
    #[serde(default)]
    error: Option<RpcErrorObject>,
}

#[derive(serde::Deserialize)]
struct RpcErrorObject {
    code: i64,
    #[serde(default)]
    message: String,
}

/// Build a JSON-RPC 2.0 request envelope.
///
/// # Errors
///
/// Returns [`WalletError::Decode`] if `params` cannot be serialized.
pub fn build_request(id: u64, method: &str, params: &impl Serialize) -> Result<Value, WalletError> {
    let params = serde_json::to_value(params).map_err(|e| WalletError::Decode(e.to_string()))?;
    Ok(serde_json::json!({
        "jsonrpc": "2.0",
        "id": id,
        "method": method,
        "params": params,
    }))
}

/// Extract and decode the `result` of a JSON-RPC response envelope.
///
/// # Errors
///
/// Returns [`WalletError::Rpc`] for error envelopes and
/// [`WalletError::Decode`] for missing or mistyped results.
pub fn decode_response<R: DeserializeOwned>(response: Value) -> Result<R, WalletError> {
    let envelope: RpcEnvelope = serde_json::from_value(response).map_err(|e| WalletError::Decode(e.to_string()))?;
    if let Some(err) = envelope.error {
        return Err(WalletError::Rpc { code: err.code, message: err.message });
    }
    let result = envelope
        .result
        .ok_or_else(|| WalletError::Decode("response has no result".to_owned()))?;
    serde_json::from_value(result).map_err(|e| WalletError::Decode(e.to_string()))
}

// =============================================================================
// CLIENT
// =============================================================================

/// How `wait_for_calls_status` polls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollPolicy {
    pub interval: Duration,
    pub max_attempts: u32,
}

impl Default for PollPolicy {
    fn default() -> Self {
        Self { interval: DEFAULT_POLL_INTERVAL, max_attempts: DEFAULT_POLL_ATTEMPTS }
    }
}

/// [`WalletClient`] speaking EIP-5792 JSON-RPC over an [`RpcTransport`].
pub struct RpcWalletClient<T> {
    transport: T,
    next_id: Cell<u64>,
    poll: PollPolicy,
}

impl<T: RpcTransport> RpcWalletClient<T> {
    #[must_use]
    pub fn new(transport: T) -> Self {
        Self { transport, next_id: Cell::new(1), poll: PollPolicy::default() }
    }

    #[must_use]
    pub fn with_poll_policy(mut self, poll: PollPolicy) -> Self {
        self.poll = poll;
        self
    }

    async fn request<R: DeserializeOwned>(&self, method: &str, params: &impl Serialize) -> Result<R, WalletError> {
        let id = self.next_id.get();
        self.next_id.set(id.wrapping_add(1));
        let envelope = build_request(id, method, params)?;
        let response = self.transport.call(envelope).await?;
        decode_response(response)
    }

    /// Single `wallet_getCallsStatus` query without waiting.
    ///
    /// # Errors
    ///
    /// Propagates transport, RPC, and decode failures.
    pub async fn get_calls_status(&self, id: &str) -> Result<CallsStatus, WalletError> {
        self.request(METHOD_GET_CALLS_STATUS, &[id]).await
    }
}

#[async_trait(?Send)]
impl<T: RpcTransport> WalletClient for RpcWalletClient<T> {
    async fn send_calls(&self, params: SendCallsParams) -> Result<SendCallsResult, WalletError> {
        self.request(METHOD_SEND_CALLS, &[params]).await
    }

    async fn wait_for_calls_status(&self, id: &str) -> Result<CallsStatus, WalletError> {
        let attempts = self.poll.max_attempts.max(1);
        for attempt in 1..=attempts {
            let status = self.get_calls_status(id).await?;
            if status.status.is_final() {
                return Ok(status);
            }
            log::debug!("calls {id} still pending (poll {attempt}/{attempts})");
            if attempt < attempts {
                poll_delay(self.poll.interval).await;
            }
        }
        Err(WalletError::StatusTimeout { attempts })
    }
}

async fn poll_delay(interval: Duration) {
    #[cfg(feature = "hydrate")]
    gloo_timers::future::sleep(interval).await;

    #[cfg(not(feature = "hydrate"))]
    let _ = interval;
}
