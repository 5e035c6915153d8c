//! Page modules

pub mod faucet;

pub use faucet::FaucetPage;
