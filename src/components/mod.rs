//! UI Components

pub mod faucet_modal;
pub mod faucet_request;
pub mod navbar;

pub use faucet_modal::FaucetRequestModal;
pub use faucet_request::FaucetRequestButton;
pub use navbar::Navbar;
