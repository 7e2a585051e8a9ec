//! # Slotted ERC-20 - Minter-gated token over raw contract storage
//!
//! A fungible token that keeps all of its state in a flat 32-byte
//! `slot → word` store laid out the Solidity way: balances in a keccak
//! mapping, an append-only minter array with a sentinel entry at index 0,
//! and a packed state word holding the active-minter count and the
//! initialized flag.
//!
//! Layers, bottom up: [`word`] (big-endian byte arithmetic), [`slots`]
//! (slot derivation and the fixed layout), [`storage`] (backends and
//! capability handles), [`registry`] and [`ledger`] (the two state
//! machines), [`token`] (typed facade) and [`dispatch`] (ABI calldata
//! router).

pub mod cli;
pub mod config;
pub mod constants;
pub mod dispatch;
pub mod errors;
pub mod ledger;
pub mod output;
pub mod registry;
pub mod slots;
pub mod storage;
pub mod token;
pub mod word;
