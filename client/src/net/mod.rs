//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles REST calls to the server and `types` defines their wire
//! schema. Wallet JSON-RPC framing lives in `crate::wallet::rpc`.

pub mod api;
pub mod types;
