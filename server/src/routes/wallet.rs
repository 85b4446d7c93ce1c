//! Wallet routes: the JSON-RPC relay and the embedded account lookup.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use serde_json::Value;

use super::auth::IdentityUser;
use crate::error::ErrorCode;
use crate::relay::{self, RelayError};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct AccountResponse {
    pub address: String,
}

/// `POST /api/wallet/rpc`: relay one JSON-RPC request upstream.
///
/// `wallet_sendCalls` is only relayed from the embedded wallet account, which
/// is looked up upstream before the request is prepared.
pub async fn rpc(State(state): State<AppState>, _identity: IdentityUser, Json(request): Json<Value>) -> Response {
    let id = request.get("id").cloned().unwrap_or(Value::Null);

    let Some(relay) = state.relay.clone() else {
        return rpc_failure(StatusCode::SERVICE_UNAVAILABLE, &id, -32603, "wallet relay not configured");
    };

    let method = request
        .get("method")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_owned();

    let sender = if method == relay::METHOD_SEND_CALLS {
        match relay::fetch_first_account(relay.as_ref()).await {
            Ok(account) => Some(account),
            Err(e) => {
                tracing::warn!(%method, error = %e, code = e.error_code(), "sender account lookup failed");
                return rpc_failure(relay_error_status(&e), &id, e.rpc_code(), &e.to_string());
            }
        }
    } else {
        None
    };

    let prepared = match relay::prepare_request(request, &state.sponsorship, sender.as_deref()) {
        Ok(prepared) => prepared,
        Err(e) => {
            tracing::warn!(%method, error = %e, code = e.error_code(), "wallet rpc rejected");
            return rpc_failure(relay_error_status(&e), &id, e.rpc_code(), &e.to_string());
        }
    };

    match relay.forward(prepared).await {
        Ok(body) => {
            tracing::info!(%method, "wallet rpc relayed");
            Json(body).into_response()
        }
        Err(e) => {
            tracing::error!(%method, error = %e, code = e.error_code(), retryable = e.retryable(), "wallet rpc failed");
            rpc_failure(relay_error_status(&e), &id, e.rpc_code(), &e.to_string())
        }
    }
}

/// `GET /api/wallet/account`: the embedded wallet's first account.
pub async fn account(State(state): State<AppState>, _identity: IdentityUser) -> Result<Json<AccountResponse>, StatusCode> {
    let relay = state.relay.ok_or(StatusCode::SERVICE_UNAVAILABLE)?;
    let address = relay::fetch_first_account(relay.as_ref())
        .await
        .map_err(|e| {
            tracing::warn!(error = %e, code = e.error_code(), "embedded wallet lookup failed");
            relay_error_status(&e)
        })?;
    Ok(Json(AccountResponse { address }))
}

fn rpc_failure(status: StatusCode, id: &Value, code: i64, message: &str) -> Response {
    (status, Json(relay::rpc_error_body(id, code, message))).into_response()
}

pub(crate) fn relay_error_status(err: &RelayError) -> StatusCode {
    match err {
        RelayError::MethodNotAllowed(_) | RelayError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
        RelayError::NoAccounts => StatusCode::NOT_FOUND,
        RelayError::SenderMismatch { .. } => StatusCode::FORBIDDEN,
        RelayError::HttpClientBuild(_) => StatusCode::INTERNAL_SERVER_ERROR,
        RelayError::Upstream(_)
        | RelayError::UpstreamStatus { .. }
        | RelayError::UpstreamParse(_)
        | RelayError::Rpc { .. } => StatusCode::BAD_GATEWAY,
    }
}

#[cfg(test)]
#[path = "wallet_test.rs"]
mod tests;
