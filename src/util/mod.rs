//! Browser-environment helpers with native no-op stubs.

pub mod browser;
pub mod storage;
