use std::collections::BTreeMap;

use alloy_primitives::B256;

use super::StorageBackend;

/// In-memory storage backend.
///
/// Zero words are not kept: storing zero clears the slot, so the map only
/// ever holds slots that read as nonzero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStorage {
    slots: BTreeMap<B256, B256>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of nonzero slots.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Nonzero slots in ascending slot order.
    pub fn iter(&self) -> impl Iterator<Item = (&B256, &B256)> {
        self.slots.iter()
    }
}

impl StorageBackend for MemoryStorage {
    fn load(&self, slot: &B256) -> B256 {
        self.slots.get(slot).copied().unwrap_or(B256::ZERO)
    }

    fn store(&mut self, slot: B256, value: B256) {
        if value == B256::ZERO {
            self.slots.remove(&slot);
        } else {
            self.slots.insert(slot, value);
        }
    }
}

impl FromIterator<(B256, B256)> for MemoryStorage {
    fn from_iter<I: IntoIterator<Item = (B256, B256)>>(iter: I) -> Self {
        let mut storage = Self::new();
        for (slot, value) in iter {
            storage.store(slot, value);
        }
        storage
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unwritten_slot_reads_zero() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.load(&B256::repeat_byte(0x42)), B256::ZERO);
        assert!(storage.is_empty());
    }

    #[test]
    fn test_storing_zero_clears_slot() {
        let mut storage = MemoryStorage::new();
        let slot = B256::with_last_byte(3);
        storage.store(slot, B256::with_last_byte(1));
        assert_eq!(storage.len(), 1);
        storage.store(slot, B256::ZERO);
        assert!(storage.is_empty());
        assert_eq!(storage.load(&slot), B256::ZERO);
    }

    #[test]
    fn test_from_iter_skips_zero_values() {
        let storage: MemoryStorage = [
            (B256::with_last_byte(1), B256::with_last_byte(5)),
            (B256::with_last_byte(2), B256::ZERO),
        ]
        .into_iter()
        .collect();
        assert_eq!(storage.len(), 1);
        assert_eq!(storage.iter().next(), Some((&B256::with_last_byte(1), &B256::with_last_byte(5))));
    }
}
