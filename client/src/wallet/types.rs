//! Wire types for batched wallet calls and their status.
//!
//! Shapes follow EIP-5792 (`wallet_sendCalls` / `wallet_getCallsStatus`),
//! with the decoders widened to accept the variants wallet providers emit in
//! practice: prepared-call id lists next to single ids, numeric status codes
//! next to legacy labels, and `"success"` next to `"0x1"` receipt statuses.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use alloy_primitives::{Address, B256, Bytes, U64, U256};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

// =============================================================================
// CALLS
// =============================================================================

/// A single call inside a batch.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Call {
    pub to: Address,
    #[serde(default)]
    pub data: Bytes,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<U256>,
}

impl Call {
    /// Plain value transfer with empty calldata.
    #[must_use]
    pub fn transfer(to: Address, value: Option<U256>) -> Self {
        Self { to, data: Bytes::new(), value }
    }
}

/// Gas sponsorship capability. The policy id is assigned by the relay.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymasterService {
    pub policy_id: String,
}

/// Capabilities requested for a batch.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Capabilities {
    /// Upgrade the sending EOA through an EIP-7702 authorization.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub eip7702_auth: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paymaster_service: Option<PaymasterService>,
}

/// Parameters of `wallet_sendCalls`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendCallsParams {
    pub from: Address,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chain_id: Option<U64>,
    pub calls: Vec<Call>,
    #[serde(default)]
    pub capabilities: Capabilities,
}

impl SendCallsParams {
    /// Batch sent from `from` under a delegated (EIP-7702) authorization.
    ///
    /// The chain id is left for the relay to fill in.
    #[must_use]
    pub fn delegated(from: Address, calls: Vec<Call>) -> Self {
        Self {
            from,
            chain_id: None,
            calls,
            capabilities: Capabilities { eip7702_auth: true, paymaster_service: None },
        }
    }
}

// =============================================================================
// SUBMISSION RESULT
// =============================================================================

#[derive(Deserialize)]
#[serde(untagged)]
enum RawSendCallsResult {
    Prepared {
        #[serde(rename = "preparedCallIds")]
        prepared_call_ids: Vec<String>,
    },
    Single {
        id: String,
    },
}

/// Identifiers returned by `wallet_sendCalls`, normalized to a list.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawSendCallsResult")]
pub struct SendCallsResult {
    #[serde(rename = "preparedCallIds")]
    pub call_ids: Vec<String>,
}

impl From<RawSendCallsResult> for SendCallsResult {
    fn from(raw: RawSendCallsResult) -> Self {
        match raw {
            RawSendCallsResult::Prepared { prepared_call_ids } => Self { call_ids: prepared_call_ids },
            RawSendCallsResult::Single { id } => Self { call_ids: vec![id] },
        }
    }
}

impl SendCallsResult {
    /// First call id, if the provider returned a non-empty one.
    #[must_use]
    pub fn first_call_id(&self) -> Option<&str> {
        self.call_ids
            .first()
            .map(String::as_str)
            .filter(|id| !id.is_empty())
    }
}

// =============================================================================
// STATUS
// =============================================================================

/// Lifecycle of a submitted batch (EIP-5792 status code classes).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BatchState {
    Pending,
    Confirmed,
    OffchainFailure,
    Reverted,
    PartiallyReverted,
    Unknown(u16),
}

impl BatchState {
    #[must_use]
    pub fn from_code(code: u16) -> Self {
        match code {
            100..=199 => Self::Pending,
            200..=299 => Self::Confirmed,
            400..=499 => Self::OffchainFailure,
            500..=599 => Self::Reverted,
            600..=699 => Self::PartiallyReverted,
            other => Self::Unknown(other),
        }
    }

    #[must_use]
    pub fn code(self) -> u16 {
        match self {
            Self::Pending => 100,
            Self::Confirmed => 200,
            Self::OffchainFailure => 400,
            Self::Reverted => 500,
            Self::PartiallyReverted => 600,
            Self::Unknown(code) => code,
        }
    }

    /// Whether polling can stop.
    #[must_use]
    pub fn is_final(self) -> bool {
        !matches!(self, Self::Pending)
    }
}

impl<'de> Deserialize<'de> for BatchState {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Code(u16),
            Label(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Code(code) => Ok(Self::from_code(code)),
            Raw::Label(label) => match label.as_str() {
                "PENDING" | "pending" => Ok(Self::Pending),
                "CONFIRMED" | "confirmed" | "success" => Ok(Self::Confirmed),
                "failure" => Ok(Self::OffchainFailure),
                other => Err(serde::de::Error::custom(format!("unknown batch status: {other}"))),
            },
        }
    }
}

impl Serialize for BatchState {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u16(self.code())
    }
}

/// Outcome recorded on a transaction receipt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ReceiptStatus {
    Success,
    Reverted,
    Other(String),
}

impl<'de> Deserialize<'de> for ReceiptStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(match raw.as_str() {
            "success" | "0x1" => Self::Success,
            "reverted" | "0x0" => Self::Reverted,
            _ => Self::Other(raw),
        })
    }
}

impl Serialize for ReceiptStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Success => serializer.serialize_str("success"),
            Self::Reverted => serializer.serialize_str("reverted"),
            Self::Other(raw) => serializer.serialize_str(raw),
        }
    }
}

/// Transaction receipt attached to a batch status.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    pub status: ReceiptStatus,
    pub transaction_hash: B256,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_hash: Option<B256>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_number: Option<U64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gas_used: Option<U256>,
}

/// Result of `wallet_getCallsStatus`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallsStatus {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub status: BatchState,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub atomic: Option<bool>,
    #[serde(default)]
    pub receipts: Option<Vec<Receipt>>,
}

impl CallsStatus {
    /// First receipt of the batch, if any were reported.
    #[must_use]
    pub fn first_receipt(&self) -> Option<&Receipt> {
        self.receipts.as_deref().and_then(<[Receipt]>::first)
    }
}
