use alloy_primitives::{address, Address};

/// Default token name and symbol
pub const DEFAULT_SYMBOL: &str = "CTOK";
/// Default decimals (ETH-style)
pub const DEFAULT_DECIMALS: u8 = 18;
/// Default token contract address (deterministic, pre-assigned)
pub const DEFAULT_TOKEN_ADDRESS: Address = address!("0000000000000000000000000000000000c70c00");
/// Longest string returned in a short-string result or revert reason
pub const MAX_SHORT_STRING: usize = 32;
/// `Error(string)` selector prefixed to revert payloads
pub const ERROR_SELECTOR: [u8; 4] = [0x08, 0xc3, 0x79, 0xa0];
/// Calldata selector length
pub const SELECTOR_LENGTH: usize = 4;
