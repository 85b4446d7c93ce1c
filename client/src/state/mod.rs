//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`identity`, `send`, `token`) so the component
//! holds small focused models and the transitions stay testable without a
//! reactive runtime.

pub mod identity;
pub mod send;
pub mod token;
