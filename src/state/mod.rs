//! Shared application state

pub mod connect;
