//! Wallet error types.
//!
//! ERROR HANDLING
//! ==============
//! `WalletError` covers the client transport and RPC layer. `SendError`
//! classifies why a sponsored send did not produce a receipt. The UI shows a
//! single failure state for every `SendError`; the variant only feeds the
//! developer log.

use super::units::ValueParseError;

/// Errors produced by a wallet client.
#[derive(Debug, thiserror::Error)]
pub enum WalletError {
    /// The request never produced a response body.
    #[error("transport failed: {0}")]
    Transport(String),

    /// The relay answered with a non-success HTTP status and no RPC error.
    #[error("relay responded with status {status}")]
    HttpStatus { status: u16 },

    /// The wallet provider returned a JSON-RPC error object.
    #[error("rpc error {code}: {message}")]
    Rpc { code: i64, message: String },

    /// The response could not be encoded or decoded.
    #[error("response decode failed: {0}")]
    Decode(String),

    /// The batch stayed pending for every poll.
    #[error("timed out waiting for calls status after {attempts} polls")]
    StatusTimeout { attempts: u32 },
}

/// Why a sponsored send failed.
#[derive(Debug, thiserror::Error)]
pub enum SendError {
    #[error("invalid input: {0}")]
    Validation(String),

    #[error("wallet client unavailable")]
    ClientUnavailable,

    #[error("submission failed: {0}")]
    SubmissionFailed(String),

    #[error("missing transaction receipts")]
    ReceiptMissing,

    #[error("transaction failed")]
    TransactionReverted,
}

impl From<WalletError> for SendError {
    fn from(err: WalletError) -> Self {
        Self::SubmissionFailed(err.to_string())
    }
}

impl From<ValueParseError> for SendError {
    fn from(err: ValueParseError) -> Self {
        Self::Validation(err.to_string())
    }
}
