//! Wire types shared with the server's REST endpoints.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use alloy_primitives::Address;
use serde::{Deserialize, Serialize};

/// The user's embedded externally-owned account.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbeddedWallet {
    pub address: Address,
}
