//! Sponsored send: upgrade the embedded EOA and submit one call.

#[cfg(test)]
#[path = "send_test.rs"]
mod send_test;

use alloy_primitives::{Address, B256};

use super::WalletClient;
use super::error::SendError;
use super::types::{Call, ReceiptStatus, SendCallsParams};
use super::units::parse_ether_value;

/// Build the single transfer call from the raw form fields.
///
/// An empty `value` means no value is attached.
///
/// # Errors
///
/// Returns [`SendError::Validation`] for an empty or malformed recipient or
/// an unparsable value.
pub fn build_call(recipient: &str, value: &str) -> Result<Call, SendError> {
    if recipient.is_empty() {
        return Err(SendError::Validation("recipient address is required".to_owned()));
    }
    let to: Address = recipient
        .trim()
        .parse()
        .map_err(|e| SendError::Validation(format!("recipient address: {e}")))?;
    let value = if value.is_empty() { None } else { Some(parse_ether_value(value)?) };
    Ok(Call::transfer(to, value))
}

/// Submit one call from `from` under an EIP-7702 authorization and wait for
/// its receipt.
///
/// Returns the transaction hash of the first receipt.
///
/// # Errors
///
/// Every failure branch maps to a [`SendError`] variant: no client, bad
/// input, submission or polling failure, missing call id, missing receipts,
/// or a non-success receipt.
pub async fn delegate_and_send(
    client: Option<&dyn WalletClient>,
    from: Address,
    recipient: &str,
    value: &str,
) -> Result<B256, SendError> {
    let client = client.ok_or(SendError::ClientUnavailable)?;
    let call = build_call(recipient, value)?;

    let submitted = client
        .send_calls(SendCallsParams::delegated(from, vec![call]))
        .await?;
    let call_id = submitted
        .first_call_id()
        .ok_or_else(|| SendError::SubmissionFailed("missing call id".to_owned()))?;

    let status = client.wait_for_calls_status(call_id).await?;
    let receipt = status.first_receipt().ok_or(SendError::ReceiptMissing)?;
    if receipt.status != ReceiptStatus::Success {
        return Err(SendError::TransactionReverted);
    }
    Ok(receipt.transaction_hash)
}
