//! Formatting utilities

/// Shorten an address for display (first 6 and last 4 characters).
pub fn truncate_address(address: &str) -> String {
    if address.len() > 10 {
        format!(
            "{}...{}",
            &address[..6],
            &address[address.len() - 4..]
        )
    } else {
        address.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncates_long_addresses() {
        let addr = "0x05f7151ea24624e12dde7e1307f9048073196644aa54d74a9c579a257214b542";
        assert_eq!(truncate_address(addr), "0x05f7...b542");
    }

    #[test]
    fn keeps_short_addresses() {
        assert_eq!(truncate_address("0x1234"), "0x1234");
    }
}
