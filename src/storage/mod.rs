//! Contract storage access.
//!
//! The host supplies a flat `32-byte slot → 32-byte word` store through
//! [`StorageBackend`]. Token logic never talks to a backend directly; it is
//! handed a capability:
//!
//! ```text
//!   StorageRef  → ReadStorage                 (views: balanceOf, minters, ...)
//!   StorageMut  → ReadStorage + WriteStorage  (init, mint, transfer, ...)
//! ```
//!
//! A view that only holds a [`StorageRef`] cannot issue a write, and the
//! compiler enforces it.

pub mod genesis;
pub mod journal;
pub mod memory;

pub use journal::{Journal, StorageDiff, StorageSlotDiff};
pub use memory::MemoryStorage;

use alloy_primitives::B256;

/// Host-provided word store.
///
/// In production: the host VM's persistent storage.
/// In tests and the CLI: [`MemoryStorage`], optionally behind a [`Journal`].
pub trait StorageBackend {
    /// Read a slot. Slots that were never written read as zero.
    fn load(&self, slot: &B256) -> B256;

    /// Write a slot. Visible to later loads through the same backend.
    fn store(&mut self, slot: B256, value: B256);
}

impl<S: StorageBackend + ?Sized> StorageBackend for &mut S {
    fn load(&self, slot: &B256) -> B256 {
        (**self).load(slot)
    }

    fn store(&mut self, slot: B256, value: B256) {
        (**self).store(slot, value)
    }
}

/// Read capability over contract storage.
pub trait ReadStorage {
    fn load(&self, slot: &B256) -> B256;
}

/// Write capability over contract storage.
pub trait WriteStorage: ReadStorage {
    fn store(&mut self, slot: B256, value: B256);

    /// Read-modify-write a single slot.
    ///
    /// Used for packed words so a field update never clobbers its neighbours.
    fn modify<F: FnOnce(&mut B256)>(&mut self, slot: B256, f: F) {
        let mut word = self.load(&slot);
        f(&mut word);
        self.store(slot, word);
    }
}

impl<R: ReadStorage> ReadStorage for &R {
    fn load(&self, slot: &B256) -> B256 {
        (**self).load(slot)
    }
}

impl<R: ReadStorage> ReadStorage for &mut R {
    fn load(&self, slot: &B256) -> B256 {
        (**self).load(slot)
    }
}

impl<W: WriteStorage> WriteStorage for &mut W {
    fn store(&mut self, slot: B256, value: B256) {
        (**self).store(slot, value)
    }
}

/// Read-only handle. Cheap to copy.
#[derive(Debug)]
pub struct StorageRef<'a, S: ?Sized> {
    backend: &'a S,
}

impl<S: ?Sized> Clone for StorageRef<'_, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: ?Sized> Copy for StorageRef<'_, S> {}

impl<'a, S: StorageBackend + ?Sized> StorageRef<'a, S> {
    pub fn new(backend: &'a S) -> Self {
        Self { backend }
    }
}

impl<S: StorageBackend + ?Sized> ReadStorage for StorageRef<'_, S> {
    fn load(&self, slot: &B256) -> B256 {
        self.backend.load(slot)
    }
}

/// Read-write handle.
#[derive(Debug)]
pub struct StorageMut<'a, S: ?Sized> {
    backend: &'a mut S,
}

impl<'a, S: StorageBackend + ?Sized> StorageMut<'a, S> {
    pub fn new(backend: &'a mut S) -> Self {
        Self { backend }
    }

    /// Downgrade to a read-only handle for the duration of the borrow.
    pub fn reader(&self) -> StorageRef<'_, S> {
        StorageRef::new(&*self.backend)
    }
}

impl<S: StorageBackend + ?Sized> ReadStorage for StorageMut<'_, S> {
    fn load(&self, slot: &B256) -> B256 {
        self.backend.load(slot)
    }
}

impl<S: StorageBackend + ?Sized> WriteStorage for StorageMut<'_, S> {
    fn store(&mut self, slot: B256, value: B256) {
        self.backend.store(slot, value)
    }
}
