//! Identity-provider state: the already-issued identity token.
//!
//! SYSTEM CONTEXT
//! ==============
//! The identity provider stores its token in a first-party cookie. The app
//! reads it once after hydration and provides it through context; the token
//! panel copies it on demand.

#[cfg(test)]
#[path = "identity_test.rs"]
mod identity_test;

/// Cookie the identity provider writes its identity token to.
pub const IDENTITY_TOKEN_COOKIE: &str = "privy-id-token";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdentityError {
    #[error("identity provider is not ready")]
    NotReady,
}

/// Identity token as last read from the provider.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IdentityState {
    pub token: Option<String>,
    pub ready: bool,
}

impl IdentityState {
    /// Build a ready state from a `document.cookie` style header.
    #[must_use]
    pub fn from_cookie_header(header: &str) -> Self {
        Self {
            token: cookie_value(header, IDENTITY_TOKEN_COOKIE).map(str::to_owned),
            ready: true,
        }
    }

    /// Current identity token. `Ok(None)` means the user has none.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityError::NotReady`] before the provider state loaded.
    pub fn identity_token(&self) -> Result<Option<String>, IdentityError> {
        if !self.ready {
            return Err(IdentityError::NotReady);
        }
        Ok(self.token.clone())
    }
}

/// Value of cookie `name` in a `k=v; k2=v2` header. Empty values count as absent.
#[must_use]
pub fn cookie_value<'a>(header: &'a str, name: &str) -> Option<&'a str> {
    header
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value)
        .filter(|value| !value.is_empty())
}
