use alloy_primitives::B256;
use thiserror::Error;

use crate::slots::SlotError;
use crate::word::word256;

/// Which validation stage rejected a call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Malformed arguments. Rejected before any storage access.
    Input,
    /// Caller not allowed, or registry in the wrong lifecycle state.
    Authorization,
    /// Overflow, underflow or insufficient balance.
    Arithmetic,
}

/// Token operation failures.
///
/// The `Display` text doubles as the short revert reason returned to the
/// caller, so every message stays within 32 bytes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    /// Address argument has nonzero bytes above its low 20
    #[error("{op}: not an address")]
    InvalidAddress {
        /// Operation name
        op: &'static str,
    },

    /// Argument block has the wrong length
    #[error("{op}: input length")]
    InvalidLength {
        /// Operation name
        op: &'static str,
        /// Expected length in bytes
        expected: usize,
        /// Actual length
        got: usize,
    },

    /// Numeric argument does not fit its declared width
    #[error("{op}: value too wide")]
    ValueTooWide {
        /// Operation name
        op: &'static str,
    },

    /// Calldata selector matches no operation
    #[error("unknown selector")]
    UnknownSelector([u8; 4]),

    #[error("init: initialized")]
    AlreadyInitialized,

    #[error("{op}: not initialized")]
    NotInitialized {
        /// Operation name
        op: &'static str,
    },

    /// Caller is not an active minter
    #[error("{op}: not from minter")]
    NotMinter {
        /// Operation name
        op: &'static str,
    },

    /// Zero word passed as a minter; it would collide with the sentinel
    #[error("{op}: zero address")]
    ZeroMinter {
        /// Operation name
        op: &'static str,
    },

    #[error("add: already minter")]
    AlreadyMinter,

    #[error("remove: not minter")]
    UnknownMinter,

    #[error("balance too low")]
    InsufficientBalance,

    #[error("mint: balance overflow")]
    BalanceOverflow,

    #[error("mint: supply overflow")]
    SupplyOverflow,

    #[error("receiver overflow")]
    ReceiverOverflow,

    #[error("minters: array full")]
    RegistryFull,

    #[error("slot: {0}")]
    Slot(#[from] SlotError),
}

impl TokenError {
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::InvalidAddress { .. }
            | Self::InvalidLength { .. }
            | Self::ValueTooWide { .. }
            | Self::UnknownSelector(_)
            | Self::ZeroMinter { .. }
            | Self::Slot(_) => FailureKind::Input,
            Self::AlreadyInitialized
            | Self::NotInitialized { .. }
            | Self::NotMinter { .. }
            | Self::AlreadyMinter
            | Self::UnknownMinter => FailureKind::Authorization,
            Self::InsufficientBalance
            | Self::BalanceOverflow
            | Self::SupplyOverflow
            | Self::ReceiverOverflow
            | Self::RegistryFull => FailureKind::Arithmetic,
        }
    }

    /// Short diagnostic for the revert payload.
    pub fn reason(&self) -> String {
        self.to_string()
    }
}

/// Reject words that are not a left-padded 20-byte address.
pub fn ensure_address(op: &'static str, word: &B256) -> Result<(), TokenError> {
    if word256::is_u160(word) {
        Ok(())
    } else {
        Err(TokenError::InvalidAddress { op })
    }
}
