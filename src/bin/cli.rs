//! SlotDB CLI
//!
//! Command-line interface for a local SlotDB data directory.
//! Each invocation opens the store (rebuilding the index), runs one
//! command and exits.

use clap::{Parser, Subcommand};
use slotdb::{Config, Engine, SyncStrategy};
use tracing_subscriber::{fmt, EnvFilter};

/// SlotDB CLI
#[derive(Parser, Debug)]
#[command(name = "slotdb")]
#[command(about = "Fixed-slot record store with an in-memory primary index")]
#[command(version)]
struct Args {
    /// Data directory
    #[arg(short, long, default_value = "./slotdb_data")]
    data_dir: String,

    /// fsync the data file after every write
    #[arg(long)]
    sync: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Add a record
    Add {
        /// Unique record id
        id: i32,

        /// Name (at most 49 bytes)
        name: String,

        /// CGPA
        cgpa: f32,
    },

    /// Look up a record through the index
    Search {
        /// The id to look up
        id: i32,
    },

    /// Tombstone a record
    Delete {
        /// The id to delete
        id: i32,
    },

    /// Show the in-memory index table
    Index,

    /// Show every slot in the data file, tombstones included
    Dump,
}

fn main() {
    // Logs go to stderr so table output on stdout stays clean
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,slotdb=info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let sync_strategy = if args.sync {
        SyncStrategy::EveryWrite
    } else {
        SyncStrategy::OsBuffered
    };
    let config = Config::builder()
        .data_dir(&args.data_dir)
        .sync_strategy(sync_strategy)
        .build();

    let mut engine = match Engine::open(config) {
        Ok(e) => e,
        Err(e) => {
            tracing::error!("Failed to open store: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = run(&mut engine, args.command) {
        eprintln!("[ERROR] {}", e);
        std::process::exit(1);
    }
}

fn run(engine: &mut Engine, command: Commands) -> slotdb::Result<()> {
    match command {
        Commands::Add { id, name, cgpa } => {
            let offset = engine.add(id, &name, cgpa)?;
            println!("[SUCCESS] Record added at offset {}.", offset);
            println!("Index now has {} records.", engine.len());
        }
        Commands::Search { id } => {
            let record = engine.search(id)?;
            println!("[FOUND] Record Retrieved:");
            println!("ID: {}", record.id);
            println!("Name: {}", record.name);
            println!("CGPA: {:.2}", record.cgpa);
        }
        Commands::Delete { id } => {
            engine.delete(id)?;
            println!("[SUCCESS] Record with ID {} deleted.", id);
        }
        Commands::Index => {
            println!("ID\t|\tOffset");
            println!("------------------------");
            for entry in engine.list_index() {
                println!("{}\t|\t{}", entry.id, entry.offset);
            }
            println!("------------------------");
            println!("Total active records: {}", engine.len());
        }
        Commands::Dump => {
            println!("Offset\t| ID\t| Name\t\t| CGPA\t| Status");
            println!("--------------------------------------------------------");
            let mut count = 0u64;
            for slot in engine.list_all_records()? {
                let slot = slot?;
                println!(
                    "{}\t| {}\t| {:<15}| {:.2}\t| {}",
                    slot.offset, slot.record.id, slot.record.name, slot.record.cgpa, slot.status
                );
                count += 1;
            }
            println!("--------------------------------------------------------");
            println!("Total records in file: {}", count);
        }
    }
    Ok(())
}
