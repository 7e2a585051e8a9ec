//! Call Dispatch
//!
//! Routes raw calldata to token operations and encodes the result, the way
//! a host entrypoint would:
//!
//! ```text
//!   calldata → Call::decode            (selector + exact-length args)
//!            → view    Token<StorageRef>          read-only, answers or declines
//!              else    Token<StorageMut<Journal>> buffered writes
//!            → Ok      commit journal, encode result
//!              Err     discard journal, encode Error(string)
//! ```
//!
//! Each call gets its own output buffer inside [`CallResult`]; nothing is
//! shared between calls.

pub mod abi;
pub mod selectors;

pub use abi::{decode_revert, decode_short_string, encode_revert, encode_short_string, Call};
pub use selectors::{function_selector, Method};

use alloy_primitives::{Address, B256};
use tracing::{debug, warn};

use crate::config::TokenConfig;
use crate::errors::TokenError;
use crate::storage::{
    Journal, ReadStorage, StorageBackend, StorageDiff, StorageMut, StorageRef, WriteStorage,
};
use crate::token::Token;
use crate::word::word256;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallStatus {
    Success,
    Failure,
}

/// Outcome of one dispatched call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallResult {
    pub status: CallStatus,
    /// ABI-encoded return data or revert payload.
    pub output: Vec<u8>,
    /// Slots changed by a successful call. Always empty on failure.
    pub diff: StorageDiff,
    /// Why the call failed.
    pub error: Option<TokenError>,
}

impl CallResult {
    fn success(output: Vec<u8>, diff: StorageDiff) -> Self {
        Self {
            status: CallStatus::Success,
            output,
            diff,
            error: None,
        }
    }

    fn failure(error: TokenError) -> Self {
        Self {
            status: CallStatus::Failure,
            output: encode_revert(&error.reason()),
            diff: StorageDiff::default(),
            error: Some(error),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == CallStatus::Success
    }

    /// Revert reason, if the call failed.
    pub fn revert_reason(&self) -> Option<String> {
        match self.status {
            CallStatus::Success => None,
            CallStatus::Failure => decode_revert(&self.output),
        }
    }

    /// Return data as a single word, if it is one.
    pub fn word(&self) -> Option<B256> {
        (self.is_success() && self.output.len() == 32).then(|| B256::from_slice(&self.output))
    }
}

/// Calldata router for one token deployment.
#[derive(Debug, Clone, Default)]
pub struct Dispatcher {
    config: TokenConfig,
}

impl Dispatcher {
    pub fn new(config: TokenConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TokenConfig {
        &self.config
    }

    /// Execute one call from `caller` against `storage`.
    ///
    /// A failed call leaves `storage` untouched.
    pub fn call<S: StorageBackend + ?Sized>(
        &self,
        storage: &mut S,
        caller: Address,
        calldata: &[u8],
    ) -> CallResult {
        let call = match Call::decode(calldata) {
            Ok(call) => call,
            Err(err) => {
                warn!(
                    target: "token::dispatch",
                    %caller,
                    calldata = %hex::encode(calldata),
                    reason = %err,
                    "rejected calldata"
                );
                return CallResult::failure(err);
            }
        };
        let method = call.method();
        debug!(target: "token::dispatch", %caller, method = method.signature(), "dispatching");

        let reader = Token::new(&self.config, StorageRef::new(&*storage));
        if let Some(outcome) = self.view(&reader, &call) {
            return match outcome {
                Ok(output) => CallResult::success(output, StorageDiff::default()),
                Err(err) => {
                    warn!(target: "token::dispatch", %caller, method = method.signature(), reason = %err, "view failed");
                    CallResult::failure(err)
                }
            };
        }

        let mut journal = Journal::new(storage);
        let outcome = {
            let mut token = Token::new(&self.config, StorageMut::new(&mut journal));
            self.execute(&mut token, caller, &call)
        };
        match outcome {
            Ok(()) => {
                let diff = journal.commit();
                debug!(target: "token::dispatch", method = method.signature(), changed = diff.len(), "committed");
                CallResult::success(Vec::new(), diff)
            }
            Err(err) => {
                let dropped = journal.discard();
                warn!(
                    target: "token::dispatch",
                    %caller,
                    method = method.signature(),
                    reason = %err,
                    dropped,
                    "call failed"
                );
                CallResult::failure(err)
            }
        }
    }

    /// Answer a read-only call. `None` for calls that write.
    fn view<S: ReadStorage>(
        &self,
        token: &Token<'_, S>,
        call: &Call,
    ) -> Option<Result<Vec<u8>, TokenError>> {
        let word = match call {
            Call::Name => return Some(Ok(encode_short_string(token.name()))),
            Call::Symbol => return Some(Ok(encode_short_string(token.symbol()))),
            Call::Decimals => Ok(word256::from_u64(token.decimals() as u64)),
            Call::TotalSupply => Ok(token.total_supply()),
            Call::BalanceOf { account } => token.balance_of(account),
            Call::Minters { index } => token.minters(*index),
            Call::MintersCurrent => Ok(word256::from_u64(token.minters_current())),
            Call::MintersEntries => Ok(word256::from_u64(token.minters_entries())),
            Call::MinterIdx { minter } => token.minter_idx(minter).map(word256::from_u64),
            Call::Transfer { .. }
            | Call::Mint { .. }
            | Call::Init { .. }
            | Call::AddMinter { .. }
            | Call::RemoveMinter { .. } => return None,
        };
        Some(word.map(|w| w.to_vec()))
    }

    /// Run a writing call. Mutating calls return no data.
    fn execute<S: WriteStorage>(
        &self,
        token: &mut Token<'_, S>,
        caller: Address,
        call: &Call,
    ) -> Result<(), TokenError> {
        match call {
            Call::Transfer { to, amount } => token.transfer(caller, to, amount),
            Call::Mint { to, amount } => token.mint(caller, to, amount),
            Call::Init { minter } => token.init(minter),
            Call::AddMinter { minter } => token.add_minter(caller, minter).map(|_| ()),
            Call::RemoveMinter { minter } => token.remove_minter(caller, minter).map(|_| ()),
            // answered by `view` before a journal is opened
            Call::Name
            | Call::Symbol
            | Call::Decimals
            | Call::TotalSupply
            | Call::BalanceOf { .. }
            | Call::Minters { .. }
            | Call::MintersCurrent
            | Call::MintersEntries
            | Call::MinterIdx { .. } => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;
    use alloy_primitives::address;

    const MINTER: Address = address!("00000000000000000000000000000000000a11ce");
    const BOB: Address = address!("0000000000000000000000000000000000000b0b");
    const CAROL: Address = address!("00000000000000000000000000000000000ca201");

    fn pad(addr: Address) -> B256 {
        word256::from_address(addr)
    }

    fn amount(n: u64) -> B256 {
        word256::from_u64(n)
    }

    fn deployed() -> (Dispatcher, MemoryStorage) {
        let dispatcher = Dispatcher::default();
        let mut mem = MemoryStorage::new();
        let result = dispatcher.call(&mut mem, MINTER, &Call::Init { minter: pad(MINTER) }.encode());
        assert!(result.is_success());
        (dispatcher, mem)
    }

    // =========================================================================
    // Views
    // =========================================================================

    #[test]
    fn test_metadata_views() {
        let (dispatcher, mut mem) = deployed();
        let name = dispatcher.call(&mut mem, BOB, &Call::Name.encode());
        assert_eq!(decode_short_string(&name.output).as_deref(), Some("CTOK"));
        let symbol = dispatcher.call(&mut mem, BOB, &Call::Symbol.encode());
        assert_eq!(decode_short_string(&symbol.output).as_deref(), Some("CTOK"));
        let decimals = dispatcher.call(&mut mem, BOB, &Call::Decimals.encode());
        assert_eq!(decimals.word(), Some(amount(18)));
    }

    #[test]
    fn test_registry_views_after_init() {
        let (dispatcher, mut mem) = deployed();
        let current = dispatcher.call(&mut mem, BOB, &Call::MintersCurrent.encode());
        assert_eq!(current.word(), Some(amount(1)));
        let entries = dispatcher.call(&mut mem, BOB, &Call::MintersEntries.encode());
        assert_eq!(entries.word(), Some(amount(1)));
        let sentinel = dispatcher.call(&mut mem, BOB, &Call::Minters { index: 0 }.encode());
        assert_eq!(sentinel.word(), Some(B256::ZERO));
        let first = dispatcher.call(&mut mem, BOB, &Call::Minters { index: 1 }.encode());
        assert_eq!(first.word(), Some(pad(MINTER)));
        let idx = dispatcher.call(&mut mem, BOB, &Call::MinterIdx { minter: pad(MINTER) }.encode());
        assert_eq!(idx.word(), Some(amount(1)));
        let zero_idx = dispatcher.call(&mut mem, BOB, &Call::MinterIdx { minter: B256::ZERO }.encode());
        assert_eq!(zero_idx.word(), Some(B256::ZERO));
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    #[test]
    fn test_mint_and_transfer_through_calldata() {
        let (dispatcher, mut mem) = deployed();
        let mint = dispatcher.call(
            &mut mem,
            MINTER,
            &Call::Mint {
                to: pad(BOB),
                amount: amount(100),
            }
            .encode(),
        );
        assert!(mint.is_success());
        assert!(mint.output.is_empty());
        // balance + supply
        assert_eq!(mint.diff.len(), 2);

        let transfer = dispatcher.call(
            &mut mem,
            BOB,
            &Call::Transfer {
                to: pad(CAROL),
                amount: amount(40),
            }
            .encode(),
        );
        assert!(transfer.is_success());

        let carol = dispatcher.call(&mut mem, BOB, &Call::BalanceOf { account: pad(CAROL) }.encode());
        assert_eq!(carol.word(), Some(amount(40)));
        let supply = dispatcher.call(&mut mem, BOB, &Call::TotalSupply.encode());
        assert_eq!(supply.word(), Some(amount(100)));
    }

    #[test]
    fn test_failed_transfer_reverts_with_reason() {
        let (dispatcher, mut mem) = deployed();
        let before = mem.clone();
        let result = dispatcher.call(
            &mut mem,
            BOB,
            &Call::Transfer {
                to: pad(CAROL),
                amount: amount(1),
            }
            .encode(),
        );
        assert_eq!(result.status, CallStatus::Failure);
        assert_eq!(result.revert_reason().as_deref(), Some("balance too low"));
        assert_eq!(result.error, Some(TokenError::InsufficientBalance));
        assert!(result.diff.is_empty());
        assert_eq!(mem, before);
    }

    #[test]
    fn test_second_init_reverts() {
        let (dispatcher, mut mem) = deployed();
        let before = mem.clone();
        let result = dispatcher.call(&mut mem, BOB, &Call::Init { minter: pad(BOB) }.encode());
        assert_eq!(result.revert_reason().as_deref(), Some("init: initialized"));
        assert_eq!(mem, before);
    }

    #[test]
    fn test_add_and_remove_minter_through_calldata() {
        let (dispatcher, mut mem) = deployed();
        let add = dispatcher.call(&mut mem, MINTER, &Call::AddMinter { minter: pad(BOB) }.encode());
        assert!(add.is_success());

        let remove = dispatcher.call(&mut mem, BOB, &Call::RemoveMinter { minter: pad(MINTER) }.encode());
        assert!(remove.is_success());

        let again = dispatcher.call(&mut mem, BOB, &Call::RemoveMinter { minter: pad(MINTER) }.encode());
        assert_eq!(again.revert_reason().as_deref(), Some("remove: not minter"));

        let current = dispatcher.call(&mut mem, BOB, &Call::MintersCurrent.encode());
        assert_eq!(current.word(), Some(amount(1)));
    }

    #[test]
    fn test_add_zero_minter_reverts() {
        let (dispatcher, mut mem) = deployed();
        let before = mem.clone();
        let result = dispatcher.call(&mut mem, MINTER, &Call::AddMinter { minter: B256::ZERO }.encode());
        assert_eq!(result.revert_reason().as_deref(), Some("add: zero address"));
        assert_eq!(mem, before);
    }

    #[test]
    fn test_every_method_routes_without_panicking() {
        let (dispatcher, mut mem) = deployed();
        for method in Method::ALL {
            let mut calldata = method.selector().to_vec();
            calldata.resize(4 + 32 * method.arg_words(), 0);
            let result = dispatcher.call(&mut mem, BOB, &calldata);
            if method.is_view() {
                assert!(result.is_success(), "{method:?} failed: {:?}", result.error);
                assert!(result.diff.is_empty());
            }
        }
    }

    #[test]
    fn test_add_minter_by_non_minter_reverts() {
        let (dispatcher, mut mem) = deployed();
        let before = mem.clone();
        let result = dispatcher.call(&mut mem, BOB, &Call::AddMinter { minter: pad(CAROL) }.encode());
        assert_eq!(result.revert_reason().as_deref(), Some("add: not from minter"));
        assert_eq!(mem, before);
    }

    // =========================================================================
    // Input shape
    // =========================================================================

    #[test]
    fn test_malformed_calldata_reverts_without_storage_change() {
        let (dispatcher, mut mem) = deployed();
        let before = mem.clone();

        let mut short = Method::Mint.selector().to_vec();
        short.extend_from_slice(pad(BOB).as_slice());
        let result = dispatcher.call(&mut mem, MINTER, &short);
        assert_eq!(result.revert_reason().as_deref(), Some("mint: input length"));

        let result = dispatcher.call(&mut mem, MINTER, &[0xde, 0xad, 0xbe, 0xef]);
        assert_eq!(result.revert_reason().as_deref(), Some("unknown selector"));

        let mut bad_address = pad(BOB);
        bad_address[0] = 1;
        let result = dispatcher.call(&mut mem, MINTER, &Call::BalanceOf { account: bad_address }.encode());
        assert_eq!(result.revert_reason().as_deref(), Some("balance: not an address"));

        assert_eq!(mem, before);
    }
}
