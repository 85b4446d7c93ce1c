//! Access-token panel state.

#[cfg(test)]
#[path = "token_test.rs"]
mod token_test;

use super::identity::{IdentityError, IdentityState};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TokenStatus {
    #[default]
    Idle,
    Loading,
    Error,
}

impl TokenStatus {
    #[must_use]
    pub fn button_label(self) -> &'static str {
        match self {
            Self::Loading => "Getting...",
            Self::Idle | Self::Error => "Get Token",
        }
    }
}

/// What the token panel body shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenPanel<'a> {
    Loading,
    Failed,
    Token(&'a str),
    Hint,
}

/// Local copy of the identity token plus the status of the last copy.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AccessTokenState {
    pub status: TokenStatus,
    pub token: Option<String>,
}

impl AccessTokenState {
    pub fn begin(&mut self) {
        self.status = TokenStatus::Loading;
    }

    /// Record the result of reading the identity token. A failed read clears
    /// the previously displayed token.
    pub fn finish(&mut self, result: Result<Option<String>, IdentityError>) {
        match result {
            Ok(token) => {
                self.token = token;
                self.status = TokenStatus::Idle;
            }
            Err(e) => {
                log::error!("Failed to get access token: {e}");
                self.token = None;
                self.status = TokenStatus::Error;
            }
        }
    }

    /// Copy the provider's current identity token, overwriting any earlier copy.
    pub fn refresh_from(&mut self, identity: &IdentityState) {
        self.begin();
        self.finish(identity.identity_token());
    }

    #[must_use]
    pub fn panel(&self) -> TokenPanel<'_> {
        match (self.status, self.token.as_deref()) {
            (TokenStatus::Loading, _) => TokenPanel::Loading,
            (TokenStatus::Error, _) => TokenPanel::Failed,
            (TokenStatus::Idle, Some(token)) => TokenPanel::Token(token),
            (TokenStatus::Idle, None) => TokenPanel::Hint,
        }
    }
}
