//! Token facade: one method per logical operation, typed arguments in,
//! typed results out.
//!
//! Address arguments are 32-byte words and must carry a 20-byte address in
//! their low bytes. The registry and ledger run the shape check before any
//! storage access.

use alloy_primitives::{Address, B256};

use crate::config::TokenConfig;
use crate::errors::TokenError;
use crate::ledger::TokenLedger;
use crate::registry::MinterRegistry;
use crate::storage::{ReadStorage, WriteStorage};

#[derive(Debug)]
pub struct Token<'c, S> {
    config: &'c TokenConfig,
    storage: S,
}

impl<'c, S: ReadStorage> Token<'c, S> {
    pub fn new(config: &'c TokenConfig, storage: S) -> Self {
        Self { config, storage }
    }

    fn registry(&self) -> MinterRegistry<&S> {
        MinterRegistry::new(&self.storage)
    }

    fn ledger(&self) -> TokenLedger<&S> {
        TokenLedger::new(&self.storage)
    }

    pub fn name(&self) -> &str {
        &self.config.name
    }

    pub fn symbol(&self) -> &str {
        &self.config.symbol
    }

    pub fn decimals(&self) -> u8 {
        self.config.decimals
    }

    pub fn total_supply(&self) -> B256 {
        self.ledger().total_supply()
    }

    pub fn balance_of(&self, account: &B256) -> Result<B256, TokenError> {
        self.ledger().balance_of(account)
    }

    /// Minters array entry; zero past the end.
    pub fn minters(&self, index: u64) -> Result<B256, TokenError> {
        self.registry().minter_at(index)
    }

    pub fn minter_idx(&self, minter: &B256) -> Result<u64, TokenError> {
        self.registry().minter_idx(minter)
    }

    pub fn minters_current(&self) -> u64 {
        self.registry().minters_current()
    }

    pub fn minters_entries(&self) -> u64 {
        self.registry().minters_entries()
    }

    pub fn from_minter(&self, caller: Address) -> bool {
        self.registry().from_minter(caller)
    }

    pub fn is_initialized(&self) -> bool {
        self.registry().is_initialized()
    }

    pub fn active_minters(&self) -> Result<Vec<Address>, TokenError> {
        self.registry().active_minters()
    }
}

impl<S: WriteStorage> Token<'_, S> {
    pub fn init(&mut self, first_minter: &B256) -> Result<(), TokenError> {
        MinterRegistry::new(&mut self.storage).init(first_minter)
    }

    pub fn add_minter(&mut self, caller: Address, minter: &B256) -> Result<u64, TokenError> {
        MinterRegistry::new(&mut self.storage).add_minter(caller, minter)
    }

    pub fn remove_minter(&mut self, caller: Address, minter: &B256) -> Result<u64, TokenError> {
        MinterRegistry::new(&mut self.storage).remove_minter(caller, minter)
    }

    pub fn mint(&mut self, caller: Address, dest: &B256, amount: &B256) -> Result<(), TokenError> {
        TokenLedger::new(&mut self.storage).mint(caller, dest, amount)
    }

    pub fn transfer(&mut self, caller: Address, dest: &B256, amount: &B256) -> Result<(), TokenError> {
        TokenLedger::new(&mut self.storage).transfer(caller, dest, amount)
    }
}
