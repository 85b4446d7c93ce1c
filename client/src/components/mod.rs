//! Reusable UI components.
//!
//! SYSTEM CONTEXT
//! ==============
//! `smart_wallet_demo` is the page body; the token panel and send outcome
//! sections are split out so each renders from one piece of state.

pub mod access_token_panel;
pub mod send_outcome;
pub mod smart_wallet_demo;
