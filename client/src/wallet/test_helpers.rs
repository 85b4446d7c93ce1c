//! Wallet client test double shared by action and state tests.

use std::cell::{Cell, RefCell};

use alloy_primitives::B256;
use async_trait::async_trait;

use super::WalletClient;
use super::error::WalletError;
use super::types::{BatchState, CallsStatus, Receipt, ReceiptStatus, SendCallsParams, SendCallsResult};

/// Scripted [`WalletClient`] that answers each method once and records calls.
pub struct MockWalletClient {
    send: RefCell<Option<Result<SendCallsResult, WalletError>>>,
    status: RefCell<Option<Result<CallsStatus, WalletError>>>,
    pub sent: RefCell<Vec<SendCallsParams>>,
    pub waited: RefCell<Vec<String>>,
    pub invocations: Cell<usize>,
}

impl MockWalletClient {
    pub fn new(send: Result<SendCallsResult, WalletError>, status: Result<CallsStatus, WalletError>) -> Self {
        Self {
            send: RefCell::new(Some(send)),
            status: RefCell::new(Some(status)),
            sent: RefCell::new(Vec::new()),
            waited: RefCell::new(Vec::new()),
            invocations: Cell::new(0),
        }
    }

    /// Client whose batch `call_id` confirms with one successful receipt.
    pub fn succeeding(call_id: &str, tx_hash: B256) -> Self {
        Self::new(
            Ok(call_ids(&[call_id])),
            Ok(final_status(vec![receipt(ReceiptStatus::Success, tx_hash)])),
        )
    }
}

#[async_trait(?Send)]
impl WalletClient for MockWalletClient {
    async fn send_calls(&self, params: SendCallsParams) -> Result<SendCallsResult, WalletError> {
        self.invocations.set(self.invocations.get() + 1);
        self.sent.borrow_mut().push(params);
        self.send
            .borrow_mut()
            .take()
            .unwrap_or_else(|| Err(WalletError::Transport("send_calls already answered".to_owned())))
    }

    async fn wait_for_calls_status(&self, id: &str) -> Result<CallsStatus, WalletError> {
        self.invocations.set(self.invocations.get() + 1);
        self.waited.borrow_mut().push(id.to_owned());
        self.status
            .borrow_mut()
            .take()
            .unwrap_or_else(|| Err(WalletError::Transport("status already answered".to_owned())))
    }
}

pub fn call_ids(ids: &[&str]) -> SendCallsResult {
    SendCallsResult { call_ids: ids.iter().map(|id| (*id).to_owned()).collect() }
}

pub fn receipt(status: ReceiptStatus, tx_hash: B256) -> Receipt {
    Receipt { status, transaction_hash: tx_hash, block_hash: None, block_number: None, gas_used: None }
}

pub fn final_status(receipts: Vec<Receipt>) -> CallsStatus {
    CallsStatus { id: None, status: BatchState::Confirmed, atomic: Some(true), receipts: Some(receipts) }
}
