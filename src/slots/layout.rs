/// Token contract storage layout.
///
/// Matches the declaration order of the equivalent Solidity contract:
///
/// ```text
///   mapping(address => uint256) _balances;      // slot 0
///   uint256 _totalSupply;                       // slot 1
///   address[] minters;                          // slot 2 (length), data at keccak256(2)
///   mapping(address => uint64) minter_idx;      // slot 3
///   uint64 minters_current; bool initialized;   // slot 4 (packed)
/// ```
pub mod token_slots {
    use alloy_primitives::B256;

    use crate::slots::PackedField;

    /// slot 0: _balances mapping base (mapping(address => uint256))
    pub const BALANCES: B256 = B256::with_last_byte(0);
    /// slot 1: _totalSupply (uint256)
    pub const TOTAL_SUPPLY: B256 = B256::with_last_byte(1);
    /// slot 2: minters.length (dynamic array length, sentinel included)
    pub const MINTERS_LENGTH: B256 = B256::with_last_byte(2);
    /// slot 3: minter_idx mapping base (mapping(address => uint64))
    pub const MINTER_IDX: B256 = B256::with_last_byte(3);
    /// slot 4: packed minter state
    pub const MINTER_STATE: B256 = B256::with_last_byte(4);

    /// slot 4, bytes 24..32: minters_current (uint64)
    pub const MINTERS_CURRENT: PackedField = PackedField::new(24, 8);
    /// slot 4, byte 23: initialized (bool)
    pub const INITIALIZED: PackedField = PackedField::new(23, 1);

    /// Every field sharing [`MINTER_STATE`].
    pub const MINTER_STATE_FIELDS: [PackedField; 2] = [MINTERS_CURRENT, INITIALIZED];

    /// Size in bytes of one `minters` array element.
    pub const MINTER_ELEM_SIZE: usize = 32;
}

#[cfg(test)]
mod tests {
    use super::token_slots::*;
    use crate::word::word256;

    #[test]
    fn test_token_slot_values() {
        assert_eq!(word256::get_u64(&BALANCES), 0);
        assert_eq!(word256::get_u64(&TOTAL_SUPPLY), 1);
        assert_eq!(word256::get_u64(&MINTERS_LENGTH), 2);
        assert_eq!(word256::get_u64(&MINTER_IDX), 3);
        assert_eq!(word256::get_u64(&MINTER_STATE), 4);
    }

    #[test]
    fn test_scalar_slots_are_distinct() {
        let all = [BALANCES, TOTAL_SUPPLY, MINTERS_LENGTH, MINTER_IDX, MINTER_STATE];
        for i in 0..all.len() {
            for j in (i + 1)..all.len() {
                assert_ne!(all[i], all[j], "slots at index {} and {} should differ", i, j);
            }
        }
    }

    #[test]
    fn test_packed_fields_do_not_overlap() {
        for (i, a) in MINTER_STATE_FIELDS.iter().enumerate() {
            assert!(a.range().end <= 32);
            for b in MINTER_STATE_FIELDS.iter().skip(i + 1) {
                assert!(!a.overlaps(b), "{a:?} overlaps {b:?}");
            }
        }
    }

    #[test]
    fn test_first_declared_field_is_lowest_order() {
        // Solidity packs the first declared variable at the low-order end.
        assert_eq!(MINTERS_CURRENT.range(), 24..32);
        assert_eq!(INITIALIZED.range(), 23..24);
    }
}
