use alloy_primitives::{Address, U256};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for the token toolkit
#[derive(Parser, Debug)]
#[command(name = "slotted-erc20", about = "Minter-gated ERC-20 storage toolkit")]
pub struct Cli {
    /// Token config JSON (name, symbol, decimals, contractAddress).
    /// Defaults are used when omitted.
    #[arg(long, global = true, env = "TOKEN_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the token's fixed storage layout
    Layout,

    /// Derive the slot of a mapping entry keyed by an address
    MapSlot {
        /// Mapping base slot (decimal or 0x-hex)
        #[arg(long)]
        base: U256,

        /// Address key
        #[arg(long)]
        key: Address,
    },

    /// Derive the slot and intra-slot offset of a dynamic array element
    ArraySlot {
        /// Array length slot (decimal or 0x-hex)
        #[arg(long)]
        base: U256,

        /// Element size in bytes.
        /// Sizes up to 32 are packed, larger sizes span whole words.
        #[arg(long, default_value = "32")]
        elem_size: usize,

        /// Element index
        #[arg(long)]
        index: u64,
    },

    /// Run calls through the dispatcher against in-memory storage
    Simulate {
        /// First minter, passed to `init`
        #[arg(long)]
        minter: Address,

        /// Mint from the first minter: `<ADDR>=<AMOUNT>` (repeatable)
        #[arg(long = "mint", value_parser = parse_mint)]
        mints: Vec<MintArg>,

        /// Transfer: `<FROM>:<TO>=<AMOUNT>` (repeatable)
        #[arg(long = "transfer", value_parser = parse_transfer)]
        transfers: Vec<TransferArg>,
    },

    /// Emit the token storage as a genesis alloc JSON
    Genesis {
        /// First minter, passed to `init`
        #[arg(long)]
        minter: Address,

        /// Mint from the first minter: `<ADDR>=<AMOUNT>` (repeatable)
        #[arg(long = "mint", value_parser = parse_mint)]
        mints: Vec<MintArg>,
    },
}

/// `--mint <ADDR>=<AMOUNT>`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MintArg {
    pub to: Address,
    pub amount: U256,
}

/// `--transfer <FROM>:<TO>=<AMOUNT>`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransferArg {
    pub from: Address,
    pub to: Address,
    pub amount: U256,
}

fn parse_amount(s: &str) -> Result<U256, String> {
    s.parse::<U256>()
        .map_err(|e| format!("invalid amount {s:?}: {e}"))
}

fn parse_address(s: &str) -> Result<Address, String> {
    s.parse::<Address>()
        .map_err(|e| format!("invalid address {s:?}: {e}"))
}

pub fn parse_mint(s: &str) -> Result<MintArg, String> {
    let (to, amount) = s
        .split_once('=')
        .ok_or_else(|| format!("expected <ADDR>=<AMOUNT>, got {s:?}"))?;
    Ok(MintArg {
        to: parse_address(to)?,
        amount: parse_amount(amount)?,
    })
}

pub fn parse_transfer(s: &str) -> Result<TransferArg, String> {
    let (route, amount) = s
        .split_once('=')
        .ok_or_else(|| format!("expected <FROM>:<TO>=<AMOUNT>, got {s:?}"))?;
    let (from, to) = route
        .split_once(':')
        .ok_or_else(|| format!("expected <FROM>:<TO>=<AMOUNT>, got {s:?}"))?;
    Ok(TransferArg {
        from: parse_address(from)?,
        to: parse_address(to)?,
        amount: parse_amount(amount)?,
    })
}
