//! Export diagnostic ledger history as CSV.
//!
//! Reads the per-DS-epoch diagnostic tables of a ledger data directory and
//! prints them in spreadsheet-friendly form on stdout. Runs against a
//! stopped node only; a live node holds the directory lock.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use clap::error::ErrorKind;
use clap::{Parser, Subcommand, ValueEnum};
use tracing::warn;
use tracing_subscriber::EnvFilter;

use ax_block_storage::{BlockStorage, StorageConfig, StorageMode};

const EXIT_OK: i32 = 0;
const EXIT_USAGE: i32 = -1;
const EXIT_STORE: i32 = -2;
const EXIT_WARNINGS: i32 = -3;

#[derive(Parser, Debug)]
#[command(name = "ax-history-export")]
#[command(about = "Export diagnostic history from a ledger data directory as CSV")]
struct Args {
    /// Ledger data directory.
    #[arg(short, long, default_value = "./data/ledger")]
    data_dir: PathBuf,

    /// Backend the directory was initialized under.
    #[arg(long, value_enum, default_value = "sorted-map")]
    mode: ModeArg,

    #[command(subcommand)]
    command: Command,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum ModeArg {
    SortedMap,
    FlatFile,
}

impl From<ModeArg> for StorageMode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::SortedMap => StorageMode::SortedMap,
            ModeArg::FlatFile => StorageMode::FlatFile,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Shard topology history: one `epoch,pubkey,role` row per member.
    Network {
        /// Lowest DS epoch to include.
        #[arg(long)]
        from: Option<u64>,
        /// Highest DS epoch to include.
        #[arg(long)]
        to: Option<u64>,
    },
    /// Coinbase history: one row per epoch with the full reward breakdown.
    Reward,
}

fn main() {
    // Logs go to stderr so the CSV stream on stdout stays clean.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let code = match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => EXIT_OK,
                _ => EXIT_USAGE,
            };
            let _ = e.print();
            process::exit(code);
        }
    };

    process::exit(run(args));
}

fn run(args: Args) -> i32 {
    if let Command::Network {
        from: Some(from),
        to: Some(to),
    } = &args.command
    {
        if from > to {
            eprintln!("--from {from} exceeds --to {to}");
            return EXIT_USAGE;
        }
    }

    let config = StorageConfig {
        data_dir: args.data_dir,
        mode: args.mode.into(),
        ..StorageConfig::default()
    };
    let store = match BlockStorage::open(&config) {
        Ok(store) => store,
        Err(e) => {
            eprintln!("Cannot open store: {e}");
            return EXIT_STORE;
        }
    };

    let result = match args.command {
        Command::Network { from, to } => {
            export_network(&store, from.unwrap_or(0), to.unwrap_or(u64::MAX))
        }
        Command::Reward => export_reward(&store),
    };
    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Export failed: {e:#}");
            EXIT_STORE
        }
    }
}

fn export_network(store: &BlockStorage, from: u64, to: u64) -> anyhow::Result<i32> {
    let total = store.diagnostic_shards_count()?;
    let snapshots = store.get_all_diagnostic_shards()?;
    let unreadable = total - snapshots.len();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "epoch,pubkey,role")?;
    let mut exported = 0usize;
    for (epoch, data) in snapshots.range(from..=to) {
        for (shard_id, shard) in data.shards.iter().enumerate() {
            for (key, _) in shard {
                writeln!(out, "{},{},shard-{}", epoch, hex::encode(key.as_bytes()), shard_id)?;
            }
        }
        for (key, _) in &data.ds_committee {
            writeln!(out, "{},{},ds", epoch, hex::encode(key.as_bytes()))?;
        }
        exported += 1;
    }

    if unreadable > 0 {
        warn!("{} topology snapshot(s) were unreadable and omitted", unreadable);
        return Ok(EXIT_WARNINGS);
    }
    if exported == 0 {
        warn!("No topology snapshots in epoch range {}..={}", from, to);
        return Ok(EXIT_WARNINGS);
    }
    Ok(EXIT_OK)
}

fn export_reward(store: &BlockStorage) -> anyhow::Result<i32> {
    let total = store.diagnostic_coinbase_count()?;
    let snapshots = store.get_all_diagnostic_coinbase()?;
    let unreadable = total - snapshots.len();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(
        out,
        "epoch,node_count,sig_count,lookup_count,total_reward,base_reward,\
         base_reward_each,lookup_reward,lookup_reward_each,node_reward,reward_each,\
         lucky_draw_winner_key,lucky_draw_winner_addr"
    )?;
    for (epoch, data) in &snapshots {
        writeln!(
            out,
            "{},{},{},{},{},{},{},{},{},{},{},{},{}",
            epoch,
            data.node_count,
            data.sig_count,
            data.lookup_count,
            data.total_reward,
            data.base_reward,
            data.base_reward_each,
            data.lookup_reward,
            data.lookup_reward_each,
            data.node_reward,
            data.reward_each,
            hex::encode(data.lucky_draw_winner_key.as_bytes()),
            hex::encode(data.lucky_draw_winner_addr),
        )?;
    }

    if unreadable > 0 {
        warn!("{} coinbase snapshot(s) were unreadable and omitted", unreadable);
        return Ok(EXIT_WARNINGS);
    }
    if snapshots.is_empty() {
        warn!("No coinbase snapshots stored");
        return Ok(EXIT_WARNINGS);
    }
    Ok(EXIT_OK)
}
