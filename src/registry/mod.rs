//! Authorized Minter Registry
//!
//! Minters live in an append-only array with a reverse index:
//!
//! ```text
//!   minters[0]            = 0x00..00     sentinel, never a minter
//!   minters[i]            = address      active
//!   minters[i]            = 0x00..00     tombstone after removal
//!   minter_idx[address]   = i            0 means "not a minter"
//!   minters_current       = live count   (packed with `initialized`)
//! ```
//!
//! Per-address lifecycle: `NeverSeen (idx 0) → Active (idx i) → Removed (idx 0)`.
//! Tombstones are never reused, so every historical minter stays auditable at
//! its original index while `minters_current` tracks who may mint right now.

use alloy_primitives::{Address, B256};
use tracing::{debug, info};

use crate::errors::{ensure_address, TokenError};
use crate::slots::{address_map_slot, array_slot, dynamic_array_base_slot, map_slot, token_slots};
use crate::storage::{ReadStorage, WriteStorage};
use crate::word::word256;

/// Proof that a caller passed the active-minter check.
///
/// Only [`MinterRegistry::authorize`] can construct one, and it is neither
/// `Clone` nor `Copy`: operations that need minter rights authorize against
/// the same storage they are about to write.
#[derive(Debug, PartialEq, Eq)]
pub struct MinterAuth {
    caller: Address,
    index: u64,
}

impl MinterAuth {
    pub fn caller(&self) -> Address {
        self.caller
    }

    /// The caller's 1-based position in the minters array.
    pub fn index(&self) -> u64 {
        self.index
    }
}

/// Registry view over contract storage.
///
/// Read operations need only a [`ReadStorage`] handle; `init`, `add_minter`
/// and `remove_minter` additionally require [`WriteStorage`].
#[derive(Debug)]
pub struct MinterRegistry<S> {
    storage: S,
}

impl<S: ReadStorage> MinterRegistry<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    fn state_word(&self) -> B256 {
        self.storage.load(&token_slots::MINTER_STATE)
    }

    pub fn is_initialized(&self) -> bool {
        token_slots::INITIALIZED.read_bool(&self.state_word())
    }

    /// Number of currently active minters.
    pub fn minters_current(&self) -> u64 {
        token_slots::MINTERS_CURRENT.read(&self.state_word())
    }

    /// Raw array length, sentinel included.
    pub fn minters_length(&self) -> u64 {
        word256::get_u64(&self.storage.load(&token_slots::MINTERS_LENGTH))
    }

    /// Entries ever appended after the sentinel, i.e. the highest index handed out.
    pub fn minters_entries(&self) -> u64 {
        self.minters_length().saturating_sub(1)
    }

    /// Index of an address-shaped word, without the shape check.
    fn index_of(&self, padded: &B256) -> u64 {
        let slot = map_slot(token_slots::MINTER_IDX, padded.as_slice());
        word256::get_u64(&self.storage.load(&slot))
    }

    /// 1-based index of `minter` in the minters array, 0 if not active.
    pub fn minter_idx(&self, minter: &B256) -> Result<u64, TokenError> {
        ensure_address("minter_idx", minter)?;
        Ok(self.index_of(minter))
    }

    /// Whether `caller` is an active minter.
    pub fn from_minter(&self, caller: Address) -> bool {
        self.index_of(&word256::from_address(caller)) != 0
    }

    /// Array entry at `index`: an address, a tombstone, or the sentinel.
    ///
    /// Indices at or past the array length read as zero.
    pub fn minter_at(&self, index: u64) -> Result<B256, TokenError> {
        if index >= self.minters_length() {
            debug!(target: "token::registry", index, "minters read past end");
            return Ok(B256::ZERO);
        }
        let loc = array_slot(minters_base(), token_slots::MINTER_ELEM_SIZE, index)?;
        Ok(self.storage.load(&loc.slot))
    }

    /// All active minters in index order.
    pub fn active_minters(&self) -> Result<Vec<Address>, TokenError> {
        let mut minters = Vec::with_capacity(self.minters_current() as usize);
        for index in 1..self.minters_length() {
            let entry = self.minter_at(index)?;
            if !word256::is_zero(&entry) {
                minters.push(word256::to_address(&entry));
            }
        }
        Ok(minters)
    }

    /// Check that the registry is initialized and `caller` is an active minter.
    pub fn authorize(&self, op: &'static str, caller: Address) -> Result<MinterAuth, TokenError> {
        if !self.is_initialized() {
            return Err(TokenError::NotInitialized { op });
        }
        let index = self.index_of(&word256::from_address(caller));
        if index == 0 {
            return Err(TokenError::NotMinter { op });
        }
        Ok(MinterAuth { caller, index })
    }
}

impl<S: WriteStorage> MinterRegistry<S> {
    /// One-shot bootstrap: seed the sentinel and the first minter.
    pub fn init(&mut self, first_minter: &B256) -> Result<(), TokenError> {
        ensure_minter_word("init", first_minter)?;
        if self.is_initialized() {
            return Err(TokenError::AlreadyInitialized);
        }

        let sentinel = self.push_entry(B256::ZERO)?;
        debug_assert_eq!(sentinel, 0);
        let index = self.push_entry(*first_minter)?;
        self.set_index(first_minter, index);
        self.storage.modify(token_slots::MINTER_STATE, |word| {
            token_slots::MINTERS_CURRENT.write(word, 1);
            token_slots::INITIALIZED.write_bool(word, true);
        });

        info!(
            target: "token::registry",
            minter = %word256::to_address(first_minter),
            index,
            "registry initialized"
        );
        Ok(())
    }

    /// Append `minter` as a new active minter. Returns its index.
    ///
    /// Rejects an address that is already active; a previously removed
    /// address gets a fresh index and its old tombstone stays in place.
    pub fn add_minter(&mut self, caller: Address, minter: &B256) -> Result<u64, TokenError> {
        ensure_minter_word("add", minter)?;
        self.authorize("add", caller)?;
        if self.index_of(minter) != 0 {
            return Err(TokenError::AlreadyMinter);
        }
        let current = self
            .minters_current()
            .checked_add(1)
            .ok_or(TokenError::RegistryFull)?;

        let index = self.push_entry(*minter)?;
        self.set_index(minter, index);
        self.set_minters_current(current);

        info!(
            target: "token::registry",
            %caller,
            minter = %word256::to_address(minter),
            index,
            current,
            "minter added"
        );
        Ok(index)
    }

    /// Deactivate `minter`, leaving a tombstone at its index. Returns that index.
    pub fn remove_minter(&mut self, caller: Address, minter: &B256) -> Result<u64, TokenError> {
        ensure_address("remove", minter)?;
        self.authorize("remove", caller)?;
        let index = self.index_of(minter);
        if index == 0 {
            return Err(TokenError::UnknownMinter);
        }
        let loc = array_slot(minters_base(), token_slots::MINTER_ELEM_SIZE, index)?;
        let current = self.minters_current().saturating_sub(1);

        self.set_index(minter, 0);
        self.storage.store(loc.slot, B256::ZERO);
        self.set_minters_current(current);

        info!(
            target: "token::registry",
            %caller,
            minter = %word256::to_address(minter),
            index,
            current,
            "minter removed"
        );
        Ok(index)
    }

    /// Append an entry at the current array length and bump the length.
    fn push_entry(&mut self, entry: B256) -> Result<u64, TokenError> {
        let index = self.minters_length();
        let next_len = index.checked_add(1).ok_or(TokenError::RegistryFull)?;
        let loc = array_slot(minters_base(), token_slots::MINTER_ELEM_SIZE, index)?;
        self.storage.store(loc.slot, entry);
        self.storage
            .store(token_slots::MINTERS_LENGTH, word256::from_u64(next_len));
        Ok(index)
    }

    fn set_index(&mut self, minter: &B256, index: u64) {
        let slot = map_slot(token_slots::MINTER_IDX, minter.as_slice());
        self.storage.store(slot, word256::from_u64(index));
    }

    fn set_minters_current(&mut self, current: u64) {
        self.storage.modify(token_slots::MINTER_STATE, |word| {
            token_slots::MINTERS_CURRENT.write(word, current)
        });
    }
}

/// A minter argument must be an address and must not be zero, since the zero
/// word marks the sentinel and tombstones.
fn ensure_minter_word(op: &'static str, minter: &B256) -> Result<(), TokenError> {
    ensure_address(op, minter)?;
    if word256::is_zero(minter) {
        return Err(TokenError::ZeroMinter { op });
    }
    Ok(())
}

/// First data slot of the minters array.
pub fn minters_base() -> B256 {
    dynamic_array_base_slot(token_slots::MINTERS_LENGTH)
}

/// Storage slot holding `minter`'s index.
pub fn minter_idx_slot(minter: Address) -> B256 {
    address_map_slot(token_slots::MINTER_IDX, minter)
}
