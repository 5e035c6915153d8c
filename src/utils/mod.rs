//! Shared helpers

pub mod constants;
pub mod format;
