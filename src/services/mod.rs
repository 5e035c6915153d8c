//! Wallet and contract interop services

pub mod connect;
pub mod faucet;
