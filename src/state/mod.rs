//! Shared client-side state.

pub mod session;
