use alloy_primitives::U256;
use futures::executor::block_on;

use super::*;
use crate::wallet::error::WalletError;
use crate::wallet::test_helpers::{MockWalletClient, call_ids, final_status, receipt};

const RECIPIENT: &str = "0x2222222222222222222222222222222222222222";

fn from() -> Address {
    Address::repeat_byte(0x01)
}

fn tx_hash() -> B256 {
    B256::repeat_byte(0xcd)
}

// =============================================================
// build_call
// =============================================================

#[test]
fn build_call_without_value() {
    let call = build_call(RECIPIENT, "").unwrap();
    assert_eq!(call.to, Address::repeat_byte(0x22));
    assert!(call.data.is_empty());
    assert_eq!(call.value, None);
}

#[test]
fn build_call_converts_value_to_wei() {
    let call = build_call(RECIPIENT, "0.5").unwrap();
    assert_eq!(call.value, Some(U256::from(500_000_000_000_000_000_u128)));
}

#[test]
fn build_call_rejects_empty_and_malformed_recipient() {
    assert!(matches!(build_call("", ""), Err(SendError::Validation(_))));
    assert!(matches!(build_call("0x1234", ""), Err(SendError::Validation(_))));
}

#[test]
fn build_call_rejects_bad_value() {
    assert!(matches!(build_call(RECIPIENT, "lots"), Err(SendError::Validation(_))));
}

// =============================================================
// delegate_and_send
// =============================================================

#[test]
fn success_returns_first_receipt_hash() {
    let client = MockWalletClient::succeeding("0xcall", tx_hash());
    let result = block_on(delegate_and_send(Some(&client), from(), RECIPIENT, "0.1"));
    assert_eq!(result.unwrap(), tx_hash());

    let sent = client.sent.borrow();
    assert_eq!(sent[0].from, from());
    assert!(sent[0].capabilities.eip7702_auth);
    assert_eq!(sent[0].calls.len(), 1);
    assert_eq!(client.waited.borrow().as_slice(), ["0xcall".to_owned()]);
}

#[test]
fn success_uses_first_of_several_receipts() {
    let client = MockWalletClient::new(
        Ok(call_ids(&["0xcall"])),
        Ok(final_status(vec![
            receipt(ReceiptStatus::Success, tx_hash()),
            receipt(ReceiptStatus::Reverted, B256::ZERO),
        ])),
    );
    assert_eq!(block_on(delegate_and_send(Some(&client), from(), RECIPIENT, "")).unwrap(), tx_hash());
}

#[test]
fn missing_client_fails_without_side_effects() {
    let err = block_on(delegate_and_send(None, from(), RECIPIENT, "")).unwrap_err();
    assert!(matches!(err, SendError::ClientUnavailable));
}

#[test]
fn empty_recipient_never_invokes_client() {
    let client = MockWalletClient::succeeding("0xcall", tx_hash());
    let err = block_on(delegate_and_send(Some(&client), from(), "", "1")).unwrap_err();
    assert!(matches!(err, SendError::Validation(_)));
    assert_eq!(client.invocations.get(), 0);
}

#[test]
fn empty_call_id_fails() {
    let client = MockWalletClient::new(Ok(call_ids(&[])), Ok(final_status(vec![])));
    let err = block_on(delegate_and_send(Some(&client), from(), RECIPIENT, "")).unwrap_err();
    assert!(matches!(err, SendError::SubmissionFailed(_)));
    assert!(client.waited.borrow().is_empty());
}

#[test]
fn empty_receipts_fail() {
    let client = MockWalletClient::new(Ok(call_ids(&["0xcall"])), Ok(final_status(vec![])));
    let err = block_on(delegate_and_send(Some(&client), from(), RECIPIENT, "")).unwrap_err();
    assert!(matches!(err, SendError::ReceiptMissing));
}

#[test]
fn absent_receipts_fail() {
    let mut status = final_status(vec![]);
    status.receipts = None;
    let client = MockWalletClient::new(Ok(call_ids(&["0xcall"])), Ok(status));
    let err = block_on(delegate_and_send(Some(&client), from(), RECIPIENT, "")).unwrap_err();
    assert!(matches!(err, SendError::ReceiptMissing));
}

#[test]
fn reverted_receipt_fails() {
    let client = MockWalletClient::new(
        Ok(call_ids(&["0xcall"])),
        Ok(final_status(vec![receipt(ReceiptStatus::Reverted, tx_hash())])),
    );
    let err = block_on(delegate_and_send(Some(&client), from(), RECIPIENT, "")).unwrap_err();
    assert!(matches!(err, SendError::TransactionReverted));
}

#[test]
fn submission_error_fails() {
    let client = MockWalletClient::new(
        Err(WalletError::Rpc { code: -32000, message: "insufficient funds".to_owned() }),
        Ok(final_status(vec![])),
    );
    let err = block_on(delegate_and_send(Some(&client), from(), RECIPIENT, "")).unwrap_err();
    assert!(matches!(err, SendError::SubmissionFailed(ref msg) if msg.contains("insufficient funds")));
}

#[test]
fn status_error_fails() {
    let client = MockWalletClient::new(
        Ok(call_ids(&["0xcall"])),
        Err(WalletError::StatusTimeout { attempts: 60 }),
    );
    let err = block_on(delegate_and_send(Some(&client), from(), RECIPIENT, "")).unwrap_err();
    assert!(matches!(err, SendError::SubmissionFailed(_)));
}
