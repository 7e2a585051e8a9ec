//! Bridging token storage to genesis allocations.
//!
//! Lets a token's state be pre-populated at chain start: build it in
//! [`MemoryStorage`], export it as an [`GenesisAccount`] storage map, and
//! read it back from a [`Genesis`] to check the layout end to end without a
//! running node.

use alloy_genesis::{Genesis, GenesisAccount};
use alloy_primitives::{Address, U256};

use super::MemoryStorage;

impl MemoryStorage {
    /// Load the storage of `address` from a genesis alloc.
    ///
    /// A missing account or missing storage map yields empty storage.
    pub fn from_genesis(genesis: &Genesis, address: Address) -> Self {
        genesis
            .alloc
            .get(&address)
            .map(Self::from_genesis_account)
            .unwrap_or_default()
    }

    pub fn from_genesis_account(account: &GenesisAccount) -> Self {
        account
            .storage
            .iter()
            .flatten()
            .map(|(slot, value)| (*slot, *value))
            .collect()
    }

    /// Export as a code-less genesis account holding this storage.
    pub fn to_genesis_account(&self) -> GenesisAccount {
        GenesisAccount {
            balance: U256::ZERO,
            nonce: Some(1),
            code: None,
            storage: Some(self.iter().map(|(slot, value)| (*slot, *value)).collect()),
            private_key: None,
        }
    }
}
