use std::cell::RefCell;

use futures::executor::block_on;

use super::*;
use crate::wallet::error::WalletError;
use crate::wallet::test_helpers::{MockWalletClient, call_ids, final_status, receipt};
use crate::wallet::types::ReceiptStatus;

const RECIPIENT: &str = "0x3333333333333333333333333333333333333333";

fn from() -> Address {
    Address::repeat_byte(0x44)
}

/// Run a submission and collect every published status.
fn run(client: Option<&dyn WalletClient>, recipient: &str, value: &str) -> Vec<SendStatus> {
    let published = RefCell::new(Vec::new());
    block_on(submit_sponsored_send(client, from(), recipient, value, |s| published.borrow_mut().push(s)));
    published.into_inner()
}

// =============================================================
// SendStatus
// =============================================================

#[test]
fn send_status_default_is_idle() {
    assert_eq!(SendStatus::default(), SendStatus::Idle);
}

#[test]
fn button_label_tracks_sending() {
    assert_eq!(SendStatus::Sending.button_label(), "Sending...");
    assert_eq!(SendStatus::Idle.button_label(), "Upgrade & Send Sponsored Transaction");
    assert_eq!(SendStatus::Error.button_label(), "Upgrade & Send Sponsored Transaction");
}

#[test]
fn button_class_marks_busy_while_sending() {
    assert!(SendStatus::Sending.button_class().contains("send-button--busy"));
    assert!(!SendStatus::Idle.button_class().contains("send-button--busy"));
}

// =============================================================
// submit_disabled
// =============================================================

#[test]
fn submit_disabled_without_client() {
    assert!(submit_disabled(false, &SendStatus::Idle));
    assert!(submit_disabled(false, &SendStatus::Error));
}

#[test]
fn submit_disabled_while_sending() {
    assert!(submit_disabled(true, &SendStatus::Sending));
}

#[test]
fn submit_enabled_when_ready_and_not_sending() {
    assert!(!submit_disabled(true, &SendStatus::Idle));
    assert!(!submit_disabled(true, &SendStatus::Error));
    assert!(!submit_disabled(true, &SendStatus::Success { tx_hash: B256::ZERO }));
}

// =============================================================
// submit_sponsored_send
// =============================================================

#[test]
fn no_client_publishes_nothing() {
    assert!(run(None, RECIPIENT, "").is_empty());
}

#[test]
fn empty_recipient_publishes_error_only() {
    let client = MockWalletClient::succeeding("0xcall", B256::repeat_byte(1));
    assert_eq!(run(Some(&client), "", "0.1"), vec![SendStatus::Error]);
    assert_eq!(client.invocations.get(), 0);
}

#[test]
fn success_publishes_sending_then_tx_hash() {
    let tx_hash = B256::repeat_byte(0x5a);
    let client = MockWalletClient::succeeding("0xcall", tx_hash);
    assert_eq!(run(Some(&client), RECIPIENT, "0.01"), vec![SendStatus::Sending, SendStatus::Success { tx_hash }]);
}

#[test]
fn every_failure_collapses_to_error() {
    let failing = [
        MockWalletClient::new(Ok(call_ids(&[])), Ok(final_status(vec![]))),
        MockWalletClient::new(Ok(call_ids(&["0xcall"])), Ok(final_status(vec![]))),
        MockWalletClient::new(
            Ok(call_ids(&["0xcall"])),
            Ok(final_status(vec![receipt(ReceiptStatus::Reverted, B256::ZERO)])),
        ),
        MockWalletClient::new(Err(WalletError::Transport("offline".to_owned())), Ok(final_status(vec![]))),
    ];
    for client in &failing {
        assert_eq!(run(Some(client), RECIPIENT, ""), vec![SendStatus::Sending, SendStatus::Error]);
    }
}

#[test]
fn invalid_value_collapses_to_error_after_sending() {
    let client = MockWalletClient::succeeding("0xcall", B256::ZERO);
    assert_eq!(run(Some(&client), RECIPIENT, "-1"), vec![SendStatus::Sending, SendStatus::Error]);
    assert_eq!(client.invocations.get(), 0);
}
