//! Calldata decoding and result encoding.
//!
//! Only the static ABI subset the token needs: every argument is one
//! 32-byte word, results are either a single word, a short string tuple,
//! or nothing. Revert payloads use the standard `Error(string)` shape.
//!
//! ```text
//!   short string:  [offset = 32][length][data, right-padded to 32]
//!   revert:        [08c379a0][short string]
//! ```

use alloy_primitives::B256;

use super::selectors::Method;
use crate::constants::{ERROR_SELECTOR, MAX_SHORT_STRING, SELECTOR_LENGTH};
use crate::errors::TokenError;
use crate::word::{word256, WORD_BYTES};

/// A decoded call with its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Name,
    Symbol,
    Decimals,
    TotalSupply,
    BalanceOf { account: B256 },
    Transfer { to: B256, amount: B256 },
    Mint { to: B256, amount: B256 },
    Init { minter: B256 },
    AddMinter { minter: B256 },
    RemoveMinter { minter: B256 },
    Minters { index: u64 },
    MintersCurrent,
    MintersEntries,
    MinterIdx { minter: B256 },
}

impl Call {
    pub fn method(&self) -> Method {
        match self {
            Call::Name => Method::Name,
            Call::Symbol => Method::Symbol,
            Call::Decimals => Method::Decimals,
            Call::TotalSupply => Method::TotalSupply,
            Call::BalanceOf { .. } => Method::BalanceOf,
            Call::Transfer { .. } => Method::Transfer,
            Call::Mint { .. } => Method::Mint,
            Call::Init { .. } => Method::Init,
            Call::AddMinter { .. } => Method::AddMinter,
            Call::RemoveMinter { .. } => Method::RemoveMinter,
            Call::Minters { .. } => Method::Minters,
            Call::MintersCurrent => Method::MintersCurrent,
            Call::MintersEntries => Method::MintersEntries,
            Call::MinterIdx { .. } => Method::MinterIdx,
        }
    }

    /// Decode `selector ++ args`.
    ///
    /// The argument block must be exactly `32 * arg_words` bytes.
    pub fn decode(calldata: &[u8]) -> Result<Self, TokenError> {
        if calldata.len() < SELECTOR_LENGTH {
            return Err(TokenError::InvalidLength {
                op: "call",
                expected: SELECTOR_LENGTH,
                got: calldata.len(),
            });
        }
        let (selector, args) = calldata.split_at(SELECTOR_LENGTH);
        let mut selector_bytes = [0u8; SELECTOR_LENGTH];
        selector_bytes.copy_from_slice(selector);
        let method =
            Method::from_selector(selector_bytes).ok_or(TokenError::UnknownSelector(selector_bytes))?;

        let expected = method.arg_words() * WORD_BYTES;
        if args.len() != expected {
            return Err(TokenError::InvalidLength {
                op: method.op_name(),
                expected,
                got: args.len(),
            });
        }
        let word = |i: usize| B256::from_slice(&args[i * WORD_BYTES..(i + 1) * WORD_BYTES]);

        Ok(match method {
            Method::Name => Call::Name,
            Method::Symbol => Call::Symbol,
            Method::Decimals => Call::Decimals,
            Method::TotalSupply => Call::TotalSupply,
            Method::BalanceOf => Call::BalanceOf { account: word(0) },
            Method::Transfer => Call::Transfer {
                to: word(0),
                amount: word(1),
            },
            Method::Mint => Call::Mint {
                to: word(0),
                amount: word(1),
            },
            Method::Init => Call::Init { minter: word(0) },
            Method::AddMinter => Call::AddMinter { minter: word(0) },
            Method::RemoveMinter => Call::RemoveMinter { minter: word(0) },
            Method::Minters => {
                let index = word(0);
                if !word256::is_u64(&index) {
                    return Err(TokenError::ValueTooWide { op: "minters" });
                }
                Call::Minters {
                    index: word256::get_u64(&index),
                }
            }
            Method::MintersCurrent => Call::MintersCurrent,
            Method::MintersEntries => Call::MintersEntries,
            Method::MinterIdx => Call::MinterIdx { minter: word(0) },
        })
    }

    /// Encode back to calldata.
    pub fn encode(&self) -> Vec<u8> {
        let method = self.method();
        let mut out = Vec::with_capacity(SELECTOR_LENGTH + method.arg_words() * WORD_BYTES);
        out.extend_from_slice(&method.selector());
        match self {
            Call::BalanceOf { account: word }
            | Call::Init { minter: word }
            | Call::AddMinter { minter: word }
            | Call::RemoveMinter { minter: word }
            | Call::MinterIdx { minter: word } => out.extend_from_slice(word.as_slice()),
            Call::Transfer { to, amount } | Call::Mint { to, amount } => {
                out.extend_from_slice(to.as_slice());
                out.extend_from_slice(amount.as_slice());
            }
            Call::Minters { index } => out.extend_from_slice(word256::from_u64(*index).as_slice()),
            Call::Name
            | Call::Symbol
            | Call::Decimals
            | Call::TotalSupply
            | Call::MintersCurrent
            | Call::MintersEntries => {}
        }
        out
    }
}

/// Encode a string as an ABI `(string)` tuple, truncated to 32 bytes.
pub fn encode_short_string(value: &str) -> Vec<u8> {
    let bytes = value.as_bytes();
    let len = bytes.len().min(MAX_SHORT_STRING);
    let mut out = vec![0u8; 3 * WORD_BYTES];
    out[..WORD_BYTES].copy_from_slice(word256::from_u64(WORD_BYTES as u64).as_slice());
    out[WORD_BYTES..2 * WORD_BYTES].copy_from_slice(word256::from_u64(len as u64).as_slice());
    out[2 * WORD_BYTES..2 * WORD_BYTES + len].copy_from_slice(&bytes[..len]);
    out
}

/// Decode an ABI `(string)` tuple produced by [`encode_short_string`].
pub fn decode_short_string(data: &[u8]) -> Option<String> {
    if data.len() < 2 * WORD_BYTES {
        return None;
    }
    let len_word = B256::from_slice(&data[WORD_BYTES..2 * WORD_BYTES]);
    if !word256::is_u64(&len_word) {
        return None;
    }
    let len = usize::try_from(word256::get_u64(&len_word)).ok()?;
    let body = data.get(2 * WORD_BYTES..2 * WORD_BYTES + len)?;
    String::from_utf8(body.to_vec()).ok()
}

/// Encode a revert reason as `Error(string)`.
pub fn encode_revert(reason: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(SELECTOR_LENGTH + 3 * WORD_BYTES);
    out.extend_from_slice(&ERROR_SELECTOR);
    out.extend_from_slice(&encode_short_string(reason));
    out
}

/// Extract the reason from an `Error(string)` payload.
pub fn decode_revert(data: &[u8]) -> Option<String> {
    let body = data.strip_prefix(&ERROR_SELECTOR[..])?;
    decode_short_string(body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::{address, hex};

    fn padded() -> B256 {
        word256::from_address(address!("0000000000000000000000000000000000000b0b"))
    }

    // =========================================================================
    // Calldata
    // =========================================================================

    #[test]
    fn test_decode_transfer() {
        let mut calldata = hex!("a9059cbb").to_vec();
        calldata.extend_from_slice(padded().as_slice());
        calldata.extend_from_slice(word256::from_u64(1000).as_slice());

        assert_eq!(
            Call::decode(&calldata),
            Ok(Call::Transfer {
                to: padded(),
                amount: word256::from_u64(1000),
            })
        );
    }

    #[test]
    fn test_encode_matches_decode_layout() {
        let call = Call::Mint {
            to: padded(),
            amount: word256::from_u64(7),
        };
        let calldata = call.encode();
        assert_eq!(calldata.len(), 68);
        assert_eq!(&calldata[..4], &hex!("40c10f19"));
        assert_eq!(Call::decode(&calldata), Ok(call));
    }

    #[test]
    fn test_decode_rejects_wrong_arg_length() {
        let mut calldata = Method::BalanceOf.selector().to_vec();
        calldata.extend_from_slice(&[0u8; 31]);
        assert_eq!(
            Call::decode(&calldata),
            Err(TokenError::InvalidLength {
                op: "balanceOf",
                expected: 32,
                got: 31
            })
        );

        let mut calldata = Method::Symbol.selector().to_vec();
        calldata.push(0);
        assert!(matches!(
            Call::decode(&calldata),
            Err(TokenError::InvalidLength { op: "symbol", .. })
        ));
    }

    #[test]
    fn test_decode_rejects_short_and_unknown() {
        assert!(matches!(
            Call::decode(&[0x01, 0x02]),
            Err(TokenError::InvalidLength { op: "call", .. })
        ));
        assert_eq!(
            Call::decode(&[0xde, 0xad, 0xbe, 0xef]),
            Err(TokenError::UnknownSelector([0xde, 0xad, 0xbe, 0xef]))
        );
    }

    #[test]
    fn test_decode_minters_index_must_fit_u64() {
        let mut calldata = Method::Minters.selector().to_vec();
        let mut index = word256::from_u64(3);
        assert_eq!(
            Call::decode(&[calldata.as_slice(), index.as_slice()].concat()),
            Ok(Call::Minters { index: 3 })
        );
        index[0] = 1;
        calldata.extend_from_slice(index.as_slice());
        assert_eq!(
            Call::decode(&calldata),
            Err(TokenError::ValueTooWide { op: "minters" })
        );
    }

    // =========================================================================
    // Results
    // =========================================================================

    #[test]
    fn test_short_string_layout() {
        let out = encode_short_string("CTOK");
        assert_eq!(out.len(), 96);
        assert_eq!(word256::get_u64(&B256::from_slice(&out[..32])), 32);
        assert_eq!(word256::get_u64(&B256::from_slice(&out[32..64])), 4);
        assert_eq!(&out[64..68], b"CTOK");
        assert!(out[68..].iter().all(|b| *b == 0));
        assert_eq!(decode_short_string(&out).as_deref(), Some("CTOK"));
    }

    #[test]
    fn test_short_string_truncates_to_32_bytes() {
        let long = "a".repeat(40);
        let out = encode_short_string(&long);
        assert_eq!(out.len(), 96);
        assert_eq!(decode_short_string(&out), Some("a".repeat(32)));
    }

    #[test]
    fn test_revert_payload() {
        let out = encode_revert("balance too low");
        assert_eq!(out.len(), 100);
        assert_eq!(&out[..4], &hex!("08c379a0"));
        assert_eq!(decode_revert(&out).as_deref(), Some("balance too low"));
        assert_eq!(decode_revert(&encode_short_string("x")), None);
    }
}
