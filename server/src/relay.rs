//! Wallet JSON-RPC relay.
//!
//! DESIGN
//! ======
//! The browser never holds the upstream provider key. It posts JSON-RPC
//! envelopes to `/api/wallet/rpc`, and this module checks the method against
//! an allowlist, applies the server's chain and sponsorship settings to
//! `wallet_sendCalls`, then forwards the request with bearer auth. Upstream
//! responses are returned untouched so JSON-RPC errors reach the client.

use std::time::Duration;

use async_trait::async_trait;
use serde_json::{Map, Value, json};

use crate::config::RelayConfig;

pub const METHOD_SEND_CALLS: &str = "wallet_sendCalls";
pub const METHOD_GET_CALLS_STATUS: &str = "wallet_getCallsStatus";
pub const METHOD_ACCOUNTS: &str = "eth_accounts";
pub const METHOD_CHAIN_ID: &str = "eth_chainId";

/// Methods the browser may invoke through the relay.
pub const ALLOWED_METHODS: &[&str] = &[METHOD_SEND_CALLS, METHOD_GET_CALLS_STATUS, METHOD_ACCOUNTS, METHOD_CHAIN_ID];

const RPC_INVALID_REQUEST: i64 = -32600;
const RPC_METHOD_NOT_FOUND: i64 = -32601;
const RPC_INTERNAL_ERROR: i64 = -32603;

// =============================================================================
// ERRORS
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RelayError {
    #[error("method not allowed: {0}")]
    MethodNotAllowed(String),

    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// The HTTP request to the upstream provider failed.
    #[error("upstream request failed: {0}")]
    Upstream(String),

    /// The upstream returned a non-success status without a JSON-RPC body.
    #[error("upstream response error: status {status}")]
    UpstreamStatus { status: u16, body: String },

    #[error("upstream response parse failed: {0}")]
    UpstreamParse(String),

    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),

    #[error("wallet has no accounts")]
    NoAccounts,

    /// `wallet_sendCalls` names a sender other than the embedded account.
    #[error("sender {from} is not the embedded wallet account")]
    SenderMismatch { from: String },

    /// The upstream answered with a JSON-RPC error object.
    #[error("rpc error {code}: {message}")]
    Rpc { code: i64, message: String },
}

impl RelayError {
    /// JSON-RPC error code used when this error is reported to the browser.
    #[must_use]
    pub fn rpc_code(&self) -> i64 {
        match self {
            Self::MethodNotAllowed(_) => RPC_METHOD_NOT_FOUND,
            Self::InvalidRequest(_) => RPC_INVALID_REQUEST,
            Self::Rpc { code, .. } => *code,
            _ => RPC_INTERNAL_ERROR,
        }
    }
}

impl crate::error::ErrorCode for RelayError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::MethodNotAllowed(_) => "E_METHOD_NOT_ALLOWED",
            Self::InvalidRequest(_) => "E_INVALID_REQUEST",
            Self::Upstream(_) => "E_UPSTREAM_REQUEST",
            Self::UpstreamStatus { .. } => "E_UPSTREAM_RESPONSE",
            Self::UpstreamParse(_) => "E_UPSTREAM_PARSE",
            Self::HttpClientBuild(_) => "E_HTTP_CLIENT_BUILD",
            Self::NoAccounts => "E_NO_ACCOUNTS",
            Self::SenderMismatch { .. } => "E_SENDER_MISMATCH",
            Self::Rpc { .. } => "E_RPC",
        }
    }

    fn retryable(&self) -> bool {
        matches!(self, Self::Upstream(_) | Self::UpstreamStatus { status: 429 | 500..=599, .. })
    }
}

// =============================================================================
// POLICY
// =============================================================================

/// Server-side settings applied to every `wallet_sendCalls`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SponsorshipPolicy {
    pub chain_id: u64,
    pub policy_id: Option<String>,
}

impl SponsorshipPolicy {
    #[must_use]
    pub fn from_config(config: &RelayConfig) -> Self {
        Self { chain_id: config.chain_id, policy_id: config.policy_id.clone() }
    }

    #[must_use]
    pub fn chain_id_hex(&self) -> String {
        format!("0x{:x}", self.chain_id)
    }
}

/// Validate a browser request and apply the sponsorship policy.
///
/// `sender` is the embedded wallet account. A `wallet_sendCalls` is only
/// relayed when its `from` matches it (case-insensitive hex).
///
/// # Errors
///
/// [`RelayError::InvalidRequest`] if the envelope is malformed or the sender
/// is unknown, [`RelayError::MethodNotAllowed`] if the method is not relayed,
/// and [`RelayError::SenderMismatch`] if `from` is another account.
pub fn prepare_request(
    mut request: Value,
    policy: &SponsorshipPolicy,
    sender: Option<&str>,
) -> Result<Value, RelayError> {
    let method = request
        .get("method")
        .and_then(Value::as_str)
        .ok_or_else(|| RelayError::InvalidRequest("missing method".into()))?
        .to_owned();

    if !ALLOWED_METHODS.contains(&method.as_str()) {
        return Err(RelayError::MethodNotAllowed(method));
    }
    if method != METHOD_SEND_CALLS {
        return Ok(request);
    }

    let call = request
        .get_mut("params")
        .and_then(Value::as_array_mut)
        .and_then(|params| params.first_mut())
        .and_then(Value::as_object_mut)
        .ok_or_else(|| RelayError::InvalidRequest("wallet_sendCalls expects one params object".into()))?;

    let expected = sender.ok_or_else(|| RelayError::InvalidRequest("sender account unknown".into()))?;
    let from = call
        .get("from")
        .and_then(Value::as_str)
        .ok_or_else(|| RelayError::InvalidRequest("wallet_sendCalls requires from".into()))?;
    if !from.eq_ignore_ascii_case(expected) {
        return Err(RelayError::SenderMismatch { from: from.to_owned() });
    }

    call.entry("chainId")
        .or_insert_with(|| Value::String(policy.chain_id_hex()));

    if let Some(policy_id) = &policy.policy_id {
        let capabilities = object_entry(call, "capabilities")?;
        let paymaster = object_entry(capabilities, "paymasterService")?;
        paymaster.insert("policyId".into(), Value::String(policy_id.clone()));
    }

    Ok(request)
}

fn object_entry<'a>(map: &'a mut Map<String, Value>, key: &str) -> Result<&'a mut Map<String, Value>, RelayError> {
    let entry = map
        .entry(key)
        .or_insert_with(|| Value::Object(Map::new()));
    if entry.is_null() {
        *entry = Value::Object(Map::new());
    }
    entry
        .as_object_mut()
        .ok_or_else(|| RelayError::InvalidRequest(format!("{key} must be an object")))
}

/// JSON-RPC 2.0 error envelope.
#[must_use]
pub fn rpc_error_body(id: &Value, code: i64, message: &str) -> Value {
    json!({
        "jsonrpc": "2.0",
        "id": id,
        "error": { "code": code, "message": message },
    })
}

// =============================================================================
// RELAY
// =============================================================================

/// Forwards one JSON-RPC envelope upstream and returns the response body.
#[async_trait]
pub trait WalletRelay: Send + Sync {
    async fn forward(&self, request: Value) -> Result<Value, RelayError>;
}

pub struct HttpWalletRelay {
    http: reqwest::Client,
    rpc_url: String,
    api_key: Option<String>,
}

impl HttpWalletRelay {
    /// Build a relay with a pooled client honoring the configured timeouts.
    ///
    /// # Errors
    ///
    /// Returns [`RelayError::HttpClientBuild`] if the client cannot be built.
    pub fn new(config: &RelayConfig) -> Result<Self, RelayError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeouts.request())
            .connect_timeout(config.timeouts.connect())
            .build()
            .map_err(|e| RelayError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, rpc_url: config.rpc_url.clone(), api_key: config.api_key.clone() })
    }

    #[must_use]
    pub fn rpc_url(&self) -> &str {
        &self.rpc_url
    }
}

#[async_trait]
impl WalletRelay for HttpWalletRelay {
    async fn forward(&self, request: Value) -> Result<Value, RelayError> {
        let mut builder = self.http.post(&self.rpc_url).json(&request);
        if let Some(key) = &self.api_key {
            builder = builder.bearer_auth(key);
        }

        let started = std::time::Instant::now();
        let response = builder
            .send()
            .await
            .map_err(|e| RelayError::Upstream(e.to_string()))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| RelayError::Upstream(e.to_string()))?;
        tracing::debug!(status, elapsed_ms = elapsed_ms(started.elapsed()), "wallet upstream responded");

        parse_upstream_body(status, &text)
    }
}

fn elapsed_ms(elapsed: Duration) -> u64 {
    u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX)
}

/// Interpret an upstream HTTP response.
///
/// Non-success statuses still pass through when the body carries a JSON-RPC
/// error object.
pub(crate) fn parse_upstream_body(status: u16, text: &str) -> Result<Value, RelayError> {
    let parsed = serde_json::from_str::<Value>(text);
    if (200..300).contains(&status) {
        return parsed.map_err(|e| RelayError::UpstreamParse(e.to_string()));
    }
    match parsed {
        Ok(body) if body.get("error").is_some() => Ok(body),
        _ => Err(RelayError::UpstreamStatus { status, body: text.to_owned() }),
    }
}

/// Ask the upstream for the wallet's accounts and return the first one.
///
/// # Errors
///
/// [`RelayError::NoAccounts`] when the account list is empty, otherwise any
/// transport or JSON-RPC failure.
pub async fn fetch_first_account(relay: &dyn WalletRelay) -> Result<String, RelayError> {
    let request = json!({
        "jsonrpc": "2.0",
        "id": 1,
        "method": METHOD_ACCOUNTS,
        "params": [],
    });
    let body = relay.forward(request).await?;

    if let Some(err) = body.get("error") {
        return Err(RelayError::Rpc {
            code: err.get("code").and_then(Value::as_i64).unwrap_or(RPC_INTERNAL_ERROR),
            message: err
                .get("message")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_owned(),
        });
    }

    let accounts = body
        .get("result")
        .and_then(Value::as_array)
        .ok_or_else(|| RelayError::UpstreamParse("eth_accounts result is not an array".into()))?;

    accounts
        .iter()
        .filter_map(Value::as_str)
        .find(|account| !account.is_empty())
        .map(str::to_owned)
        .ok_or(RelayError::NoAccounts)
}

#[cfg(test)]
#[path = "relay_test.rs"]
mod tests;
