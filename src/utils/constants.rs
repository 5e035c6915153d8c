//! Application constants

/// Deployed Bwc faucet contract on Starknet Sepolia.
pub const BWC_CONTRACT_ADDRESS: &str =
    "0x05f7151ea24624e12dde7e1307f9048073196644aa54d74a9c579a257214b542";

/// Minimal ABI for the faucet entry point.
pub const BWC_FAUCET_ABI: &str = r#"[
  {
    "name": "request_bwc_token",
    "type": "function",
    "inputs": [
      { "name": "address", "type": "core::starknet::contract_address::ContractAddress" }
    ],
    "outputs": [],
    "state_mutability": "external"
  }
]"#;
