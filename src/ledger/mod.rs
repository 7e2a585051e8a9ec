//! Balance and supply accounting.
//!
//! Every mutating operation computes all new values first and only writes
//! once nothing can fail any more, so a rejected call leaves storage
//! byte-for-byte unchanged even without host rollback.

use std::cmp::Ordering;

use alloy_primitives::{Address, B256};
use tracing::info;

use crate::errors::{ensure_address, TokenError};
use crate::registry::MinterRegistry;
use crate::slots::{map_slot, token_slots};
use crate::storage::{ReadStorage, WriteStorage};
use crate::word::word256;

/// Ledger view over contract storage.
#[derive(Debug)]
pub struct TokenLedger<S> {
    storage: S,
}

impl<S: ReadStorage> TokenLedger<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn total_supply(&self) -> B256 {
        self.storage.load(&token_slots::TOTAL_SUPPLY)
    }

    /// Balance of an address-shaped word. Never-credited accounts read zero.
    pub fn balance_of(&self, account: &B256) -> Result<B256, TokenError> {
        ensure_address("balance", account)?;
        Ok(self.storage.load(&balance_slot(account)))
    }

    /// Whether `init` has run. Transfers are rejected until it has.
    pub fn is_initialized(&self) -> bool {
        token_slots::INITIALIZED.read_bool(&self.storage.load(&token_slots::MINTER_STATE))
    }
}

impl<S: WriteStorage> TokenLedger<S> {
    /// Credit `amount` new units to `dest`.
    ///
    /// `caller` must be an active minter at the time of the call. Fails
    /// without writing if either the balance or the total supply would pass
    /// 2^256 - 1.
    pub fn mint(&mut self, caller: Address, dest: &B256, amount: &B256) -> Result<(), TokenError> {
        ensure_address("mint", dest)?;
        let auth = MinterRegistry::new(&self.storage).authorize("mint", caller)?;

        let dest_slot = balance_slot(dest);
        let mut balance = self.storage.load(&dest_slot);
        if word256::add(&mut balance, amount) {
            return Err(TokenError::BalanceOverflow);
        }
        let mut supply = self.total_supply();
        if word256::add(&mut supply, amount) {
            return Err(TokenError::SupplyOverflow);
        }

        self.storage.store(token_slots::TOTAL_SUPPLY, supply);
        self.storage.store(dest_slot, balance);

        info!(
            target: "token::ledger",
            minter = %auth.caller(),
            index = auth.index(),
            dest = %word256::to_address(dest),
            amount = %amount,
            "minted"
        );
        Ok(())
    }

    /// Move `amount` from `from` to `dest`.
    ///
    /// Insufficient balance is a hard failure. Self-transfers are allowed and
    /// leave the balance unchanged.
    pub fn transfer(&mut self, from: Address, dest: &B256, amount: &B256) -> Result<(), TokenError> {
        ensure_address("transfer", dest)?;
        if !self.is_initialized() {
            return Err(TokenError::NotInitialized { op: "transfer" });
        }

        let from_slot = balance_slot(&word256::from_address(from));
        let dest_slot = balance_slot(dest);

        let mut from_balance = self.storage.load(&from_slot);
        if word256::cmp(&from_balance, amount) == Ordering::Less {
            return Err(TokenError::InsufficientBalance);
        }
        let underflow = word256::sub(&mut from_balance, amount);
        debug_assert!(!underflow);

        let mut dest_balance = if dest_slot == from_slot {
            from_balance
        } else {
            self.storage.load(&dest_slot)
        };
        if word256::add(&mut dest_balance, amount) {
            return Err(TokenError::ReceiverOverflow);
        }

        self.storage.store(from_slot, from_balance);
        self.storage.store(dest_slot, dest_balance);

        info!(
            target: "token::ledger",
            %from,
            dest = %word256::to_address(dest),
            amount = %amount,
            "transferred"
        );
        Ok(())
    }
}

/// Storage slot of an address-shaped word's balance.
pub fn balance_slot(account: &B256) -> B256 {
    map_slot(token_slots::BALANCES, account.as_slice())
}
