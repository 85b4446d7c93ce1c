use super::*;

fn ready(token: Option<&str>) -> IdentityState {
    IdentityState { token: token.map(str::to_owned), ready: true }
}

// =============================================================
// TokenStatus
// =============================================================

#[test]
fn button_label_while_loading() {
    assert_eq!(TokenStatus::Loading.button_label(), "Getting...");
    assert_eq!(TokenStatus::Idle.button_label(), "Get Token");
    assert_eq!(TokenStatus::Error.button_label(), "Get Token");
}

// =============================================================
// AccessTokenState
// =============================================================

#[test]
fn default_shows_hint() {
    let state = AccessTokenState::default();
    assert_eq!(state.panel(), TokenPanel::Hint);
}

#[test]
fn begin_shows_loading() {
    let mut state = AccessTokenState::default();
    state.begin();
    assert_eq!(state.panel(), TokenPanel::Loading);
}

#[test]
fn refresh_copies_current_token() {
    let mut state = AccessTokenState::default();
    state.refresh_from(&ready(Some("first")));
    assert_eq!(state.status, TokenStatus::Idle);
    assert_eq!(state.panel(), TokenPanel::Token("first"));
}

#[test]
fn refresh_overwrites_previous_token() {
    let mut state = AccessTokenState::default();
    state.refresh_from(&ready(Some("first")));
    state.refresh_from(&ready(Some("second")));
    assert_eq!(state.panel(), TokenPanel::Token("second"));
}

#[test]
fn refresh_without_token_returns_to_hint() {
    let mut state = AccessTokenState { status: TokenStatus::Idle, token: Some("stale".to_owned()) };
    state.refresh_from(&ready(None));
    assert_eq!(state.panel(), TokenPanel::Hint);
}

#[test]
fn refresh_before_provider_ready_fails_and_clears() {
    let mut state = AccessTokenState { status: TokenStatus::Idle, token: Some("stale".to_owned()) };
    state.refresh_from(&IdentityState::default());
    assert_eq!(state.status, TokenStatus::Error);
    assert_eq!(state.token, None);
    assert_eq!(state.panel(), TokenPanel::Failed);
}
