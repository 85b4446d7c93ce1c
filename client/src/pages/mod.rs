//! Route-level page components.

pub mod home;
