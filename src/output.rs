//! Colored console output for the token toolkit.
//!
//! Color scheme: blue+bold headers, cyan values, green success,
//! red failures, dimmed secondary text.

use alloy_primitives::{Address, B256, U256};
use colored::Colorize;

use crate::config::TokenConfig;
use crate::dispatch::CallResult;
use crate::slots::{token_slots, ArraySlot, PackedField};
use crate::storage::StorageDiff;

// ── Helpers ────────────────────────────────────────────────────────

/// Format a 32-byte word as an unsigned decimal.
pub fn format_amount(word: &B256) -> String {
    U256::from_be_bytes(word.0).to_string()
}

/// Format a packed field as `bytes a..b`.
pub fn format_field(field: &PackedField) -> String {
    let range = field.range();
    format!("bytes {}..{}", range.start, range.end)
}

// ── Banner ─────────────────────────────────────────────────────────

/// Print the token identity.
pub fn print_banner(config: &TokenConfig) {
    println!();
    println!("{}", "=== Slotted ERC-20 ===".blue().bold());
    println!("  Name:     {}", config.name.cyan());
    println!("  Symbol:   {}", config.symbol.cyan());
    println!("  Decimals: {}", config.decimals.to_string().cyan());
    println!("  Address:  {}", format!("{}", config.contract_address).cyan());
}

// ── Layout & Slots ─────────────────────────────────────────────────

/// Print the fixed storage layout.
pub fn print_layout(minters_base: B256) {
    println!();
    println!("{}", "Storage layout:".blue().bold());
    let rows = [
        ("balances (mapping base)", token_slots::BALANCES),
        ("totalSupply", token_slots::TOTAL_SUPPLY),
        ("minters.length", token_slots::MINTERS_LENGTH),
        ("minter_idx (mapping base)", token_slots::MINTER_IDX),
        ("minter state (packed)", token_slots::MINTER_STATE),
    ];
    for (label, slot) in rows {
        println!("  {} {}", format!("{label:<26}").dimmed(), format!("{slot}").cyan());
    }
    println!(
        "    {} {}",
        "minters_current:".dimmed(),
        format_field(&token_slots::MINTERS_CURRENT).cyan()
    );
    println!(
        "    {} {}",
        "initialized:    ".dimmed(),
        format_field(&token_slots::INITIALIZED).cyan()
    );
    println!(
        "  {} {}",
        format!("{:<26}", "minters data").dimmed(),
        format!("{minters_base}").cyan()
    );
}

/// Print a derived mapping slot.
pub fn print_map_slot(base: B256, key: Address, slot: B256) {
    println!("{}", "Mapping slot:".blue().bold());
    println!("  {} {}", "Base:".dimmed(), format!("{base}").cyan());
    println!("  {} {}", "Key: ".dimmed(), format!("{key}").cyan());
    println!("  {} {}", "Slot:".dimmed(), format!("{slot}").green());
}

/// Print a derived array element location.
pub fn print_array_slot(length_slot: B256, index: u64, location: &ArraySlot) {
    println!("{}", "Array element:".blue().bold());
    println!("  {} {}", "Length slot:".dimmed(), format!("{length_slot}").cyan());
    println!("  {} {}", "Index:      ".dimmed(), index.to_string().cyan());
    println!("  {} {}", "Slot:       ".dimmed(), format!("{}", location.slot).green());
    println!(
        "  {} {} ({} byte element)",
        "Offset:     ".dimmed(),
        location.offset.to_string().cyan(),
        location.elem_size
    );
}

// ── Calls ──────────────────────────────────────────────────────────

/// Print one dispatched call and its outcome.
pub fn print_call(label: &str, result: &CallResult) {
    if result.is_success() {
        println!(
            "  {} {} {}",
            "OK".green().bold(),
            label,
            format!("({})", result.diff.summary()).dimmed()
        );
    } else {
        println!(
            "  {} {}: {}",
            "FAILED".red().bold(),
            label,
            result.revert_reason().unwrap_or_default().yellow()
        );
    }
}

/// Print every slot a call changed.
pub fn print_diff(diff: &StorageDiff) {
    for (slot, change) in &diff.slots {
        println!(
            "      {} {} -> {}",
            format!("{slot}").dimmed(),
            format_amount(&change.old_value).dimmed(),
            format_amount(&change.new_value).cyan()
        );
    }
}

// ── State ──────────────────────────────────────────────────────────

/// Print the active minters.
pub fn print_minters(minters: &[Address]) {
    println!();
    println!(
        "{} ({}):",
        "Active minters".blue().bold(),
        minters.len().to_string().cyan()
    );
    for (i, minter) in minters.iter().enumerate() {
        println!(
            "  {}. {}",
            (i + 1).to_string().dimmed(),
            format!("{minter}").cyan()
        );
    }
}

/// Print account balances and total supply.
pub fn print_balances(balances: &[(Address, B256)], total_supply: &B256) {
    println!();
    println!("{}", "Balances:".blue().bold());
    for (account, balance) in balances {
        println!("  {} {}", format!("{account}").dimmed(), format_amount(balance).cyan());
    }
    println!("  {} {}", "Total supply:".bold(), format_amount(total_supply).green());
}

// ── Tests ───────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::word::word256;

    #[test]
    fn test_format_amount_small() {
        assert_eq!(format_amount(&word256::from_u64(1234)), "1234");
    }

    #[test]
    fn test_format_amount_zero() {
        assert_eq!(format_amount(&B256::ZERO), "0");
    }

    #[test]
    fn test_format_amount_max() {
        assert_eq!(format_amount(&B256::repeat_byte(0xff)), U256::MAX.to_string());
    }

    #[test]
    fn test_format_field() {
        assert_eq!(format_field(&token_slots::MINTERS_CURRENT), "bytes 24..32");
        assert_eq!(format_field(&token_slots::INITIALIZED), "bytes 23..24");
    }
}
