use slotted_erc20::cli::{Cli, Command, MintArg, TransferArg};
use slotted_erc20::config::TokenConfig;
use slotted_erc20::dispatch::{Call, CallResult, Dispatcher};
use slotted_erc20::output;
use slotted_erc20::registry::minters_base;
use slotted_erc20::slots::{address_map_slot, array_slot, dynamic_array_base_slot};
use slotted_erc20::storage::{MemoryStorage, StorageRef};
use slotted_erc20::token::Token;
use slotted_erc20::word::word256;

use alloy_primitives::{Address, B256};
use clap::Parser;
use std::collections::BTreeMap;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> eyre::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => {
            let config = TokenConfig::from_json_file(path)?;
            info!(path = %path.display(), symbol = %config.symbol, "loaded token config");
            config
        }
        None => TokenConfig::default(),
    };

    match cli.command {
        Command::Layout => {
            output::print_banner(&config);
            output::print_layout(minters_base());
        }
        Command::MapSlot { base, key } => {
            let base = B256::from(base);
            output::print_map_slot(base, key, address_map_slot(base, key));
        }
        Command::ArraySlot {
            base,
            elem_size,
            index,
        } => {
            let length_slot = B256::from(base);
            let location = array_slot(dynamic_array_base_slot(length_slot), elem_size, index)?;
            output::print_array_slot(length_slot, index, &location);
        }
        Command::Simulate {
            minter,
            mints,
            transfers,
        } => simulate(config, minter, &mints, &transfers)?,
        Command::Genesis { minter, mints } => genesis(config, minter, &mints)?,
    }

    Ok(())
}

/// Run `init`, then every mint and transfer, printing each outcome.
fn simulate(
    config: TokenConfig,
    minter: Address,
    mints: &[MintArg],
    transfers: &[TransferArg],
) -> eyre::Result<()> {
    output::print_banner(&config);
    let dispatcher = Dispatcher::new(config);
    let mut storage = MemoryStorage::new();

    println!();
    let init = dispatcher.call(&mut storage, minter, &init_call(minter).encode());
    output::print_call(&format!("init({minter})"), &init);
    output::print_diff(&init.diff);
    if !init.is_success() {
        eyre::bail!("init failed: {}", init.revert_reason().unwrap_or_default());
    }

    for mint in mints {
        let result = dispatcher.call(&mut storage, minter, &mint_call(mint).encode());
        output::print_call(&format!("mint({}, {})", mint.to, mint.amount), &result);
        output::print_diff(&result.diff);
    }

    for transfer in transfers {
        let call = Call::Transfer {
            to: word256::from_address(transfer.to),
            amount: B256::from(transfer.amount),
        };
        let result = dispatcher.call(&mut storage, transfer.from, &call.encode());
        output::print_call(
            &format!("transfer({} -> {}, {})", transfer.from, transfer.to, transfer.amount),
            &result,
        );
        output::print_diff(&result.diff);
    }

    let mut accounts = vec![minter];
    accounts.extend(mints.iter().map(|m| m.to));
    accounts.extend(transfers.iter().flat_map(|t| [t.from, t.to]));
    let mut seen = Vec::with_capacity(accounts.len());
    for account in accounts {
        if !seen.contains(&account) {
            seen.push(account);
        }
    }

    let token = Token::new(dispatcher.config(), StorageRef::new(&storage));
    let balances = seen
        .into_iter()
        .map(|account| {
            token
                .balance_of(&word256::from_address(account))
                .map(|balance| (account, balance))
        })
        .collect::<Result<Vec<_>, _>>()?;
    output::print_minters(&token.active_minters()?);
    output::print_balances(&balances, &token.total_supply());
    Ok(())
}

/// Build the token storage and print it as a genesis alloc entry.
fn genesis(config: TokenConfig, minter: Address, mints: &[MintArg]) -> eyre::Result<()> {
    let dispatcher = Dispatcher::new(config);
    let mut storage = MemoryStorage::new();

    let init = dispatcher.call(&mut storage, minter, &init_call(minter).encode());
    ensure_success("init", &init)?;
    for mint in mints {
        let result = dispatcher.call(&mut storage, minter, &mint_call(mint).encode());
        ensure_success("mint", &result)?;
    }

    let address = dispatcher.config().contract_address;
    info!(%address, slots = storage.len(), "exporting token storage");
    let alloc = BTreeMap::from([(address, storage.to_genesis_account())]);
    println!("{}", serde_json::to_string_pretty(&alloc)?);
    Ok(())
}

fn init_call(minter: Address) -> Call {
    Call::Init {
        minter: word256::from_address(minter),
    }
}

fn mint_call(mint: &MintArg) -> Call {
    Call::Mint {
        to: word256::from_address(mint.to),
        amount: B256::from(mint.amount),
    }
}

fn ensure_success(op: &str, result: &CallResult) -> eyre::Result<()> {
    if result.is_success() {
        Ok(())
    } else {
        eyre::bail!("{op} failed: {}", result.revert_reason().unwrap_or_default())
    }
}
