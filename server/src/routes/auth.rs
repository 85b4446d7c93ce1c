//! Identity extractor for the wallet API.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use serde_json::Value;

use crate::relay;

/// Cookie set by the identity provider in the browser.
pub const IDENTITY_COOKIE_NAME: &str = "privy-id-token";

const RPC_UNAUTHORIZED_CODE: i64 = -32603;

// =============================================================================
// AUTH EXTRACTOR
// =============================================================================

/// Caller presenting an identity token cookie.
/// Use as a handler parameter to require authentication.
pub struct IdentityUser {
    pub token: String,
}

impl<S> axum::extract::FromRequestParts<S> for IdentityUser
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut axum::http::request::Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let token = jar
            .get(IDENTITY_COOKIE_NAME)
            .map(Cookie::value)
            .unwrap_or_default()
            .trim();
        if token.is_empty() {
            tracing::warn!(path = %parts.uri.path(), "wallet api request without identity token");
            return Err(unauthorized());
        }

        Ok(Self { token: token.to_owned() })
    }
}

/// 401 with a JSON-RPC error body so wallet clients can decode it.
pub(crate) fn unauthorized() -> Response {
    let body = relay::rpc_error_body(&Value::Null, RPC_UNAUTHORIZED_CODE, "identity token required");
    (StatusCode::UNAUTHORIZED, Json(body)).into_response()
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
