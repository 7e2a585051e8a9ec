//! Per-call write journal.
//!
//! Buffers every write a call makes on top of the underlying backend. Loads
//! see the call's own writes first. When the call finishes the journal is
//! either committed (writes applied, diff returned) or discarded (backend
//! untouched).
//!
//! ```text
//!   call starts → Journal::new(&mut storage)
//!               → token operation loads/stores through the journal
//!   Ok          → journal.commit()   → StorageDiff
//!   Err         → journal.discard()  → nothing persisted
//! ```

use std::collections::BTreeMap;
use std::fmt;

use alloy_primitives::B256;

use super::StorageBackend;

/// Difference in a single storage slot value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StorageSlotDiff {
    /// Value before the call.
    pub old_value: B256,
    /// Value after the call.
    pub new_value: B256,
}

impl StorageSlotDiff {
    pub fn new(old_value: B256, new_value: B256) -> Self {
        Self {
            old_value,
            new_value,
        }
    }

    /// Whether the value actually changed.
    pub fn is_noop(&self) -> bool {
        self.old_value == self.new_value
    }
}

/// All slots a committed call changed, in slot order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StorageDiff {
    pub slots: BTreeMap<B256, StorageSlotDiff>,
}

impl StorageDiff {
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn get(&self, slot: &B256) -> Option<&StorageSlotDiff> {
        self.slots.get(slot)
    }

    /// One-line human-readable summary.
    pub fn summary(&self) -> String {
        format!("{} slot(s) changed", self.slots.len())
    }
}

impl fmt::Display for StorageDiff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.summary())?;
        for (slot, diff) in &self.slots {
            writeln!(f, "  {slot}: {} -> {}", diff.old_value, diff.new_value)?;
        }
        Ok(())
    }
}

/// Write buffer over a backend.
#[derive(Debug)]
pub struct Journal<'a, S: StorageBackend + ?Sized> {
    inner: &'a mut S,
    writes: BTreeMap<B256, B256>,
}

impl<'a, S: StorageBackend + ?Sized> Journal<'a, S> {
    pub fn new(inner: &'a mut S) -> Self {
        Self {
            inner,
            writes: BTreeMap::new(),
        }
    }

    /// Number of distinct slots written so far.
    pub fn pending(&self) -> usize {
        self.writes.len()
    }

    /// Apply buffered writes to the backend and report what changed.
    ///
    /// Slots rewritten with their original value are applied but left out
    /// of the diff.
    pub fn commit(self) -> StorageDiff {
        let mut diff = StorageDiff::default();
        for (slot, new_value) in self.writes {
            let old_value = self.inner.load(&slot);
            let change = StorageSlotDiff::new(old_value, new_value);
            if !change.is_noop() {
                diff.slots.insert(slot, change);
            }
            self.inner.store(slot, new_value);
        }
        diff
    }

    /// Drop buffered writes. Returns how many slots were discarded.
    pub fn discard(self) -> usize {
        self.writes.len()
    }
}

impl<S: StorageBackend + ?Sized> StorageBackend for Journal<'_, S> {
    fn load(&self, slot: &B256) -> B256 {
        match self.writes.get(slot) {
            Some(value) => *value,
            None => self.inner.load(slot),
        }
    }

    fn store(&mut self, slot: B256, value: B256) {
        self.writes.insert(slot, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;
    use crate::word::word256;

    #[test]
    fn test_journal_reads_own_writes() {
        let mut mem = MemoryStorage::new();
        mem.store(B256::with_last_byte(1), word256::from_u64(1));

        let mut journal = Journal::new(&mut mem);
        assert_eq!(journal.load(&B256::with_last_byte(1)), word256::from_u64(1));
        journal.store(B256::with_last_byte(1), word256::from_u64(2));
        assert_eq!(journal.load(&B256::with_last_byte(1)), word256::from_u64(2));
        assert_eq!(journal.pending(), 1);
    }

    #[test]
    fn test_discard_leaves_backend_untouched() {
        let mut mem = MemoryStorage::new();
        mem.store(B256::with_last_byte(1), word256::from_u64(1));
        let before = mem.clone();

        let mut journal = Journal::new(&mut mem);
        journal.store(B256::with_last_byte(1), word256::from_u64(99));
        journal.store(B256::with_last_byte(2), word256::from_u64(5));
        assert_eq!(journal.discard(), 2);

        assert_eq!(mem, before);
    }

    #[test]
    fn test_commit_applies_and_diffs() {
        let mut mem = MemoryStorage::new();
        mem.store(B256::with_last_byte(1), word256::from_u64(1));

        let mut journal = Journal::new(&mut mem);
        journal.store(B256::with_last_byte(1), word256::from_u64(3));
        journal.store(B256::with_last_byte(2), word256::from_u64(4));
        let diff = journal.commit();

        assert_eq!(diff.len(), 2);
        assert_eq!(
            diff.get(&B256::with_last_byte(1)),
            Some(&StorageSlotDiff::new(word256::from_u64(1), word256::from_u64(3)))
        );
        assert_eq!(mem.load(&B256::with_last_byte(2)), word256::from_u64(4));
        assert_eq!(diff.summary(), "2 slot(s) changed");
    }

    #[test]
    fn test_commit_omits_noop_rewrites() {
        let mut mem = MemoryStorage::new();
        mem.store(B256::with_last_byte(1), word256::from_u64(7));

        let mut journal = Journal::new(&mut mem);
        journal.store(B256::with_last_byte(1), word256::from_u64(7));
        let diff = journal.commit();

        assert!(diff.is_empty());
        assert_eq!(mem.load(&B256::with_last_byte(1)), word256::from_u64(7));
    }

    #[test]
    fn test_display_lists_every_slot() {
        let mut diff = StorageDiff::default();
        diff.slots.insert(
            B256::with_last_byte(1),
            StorageSlotDiff::new(B256::ZERO, word256::from_u64(1)),
        );
        let rendered = diff.to_string();
        assert!(rendered.starts_with("1 slot(s) changed"));
        assert_eq!(rendered.lines().count(), 2);
    }
}
