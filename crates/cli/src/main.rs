// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! diskdb - inspect and edit file-per-collection JSON databases

mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{collection, document, Context};
use diskdb_storage::{CorruptCollection, DbOptions};
use output::OutputFormat;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// Options file picked up from the working directory when `--config` is absent
const DEFAULT_CONFIG: &str = "diskdb.toml";

#[derive(Parser)]
#[command(
    name = "diskdb",
    version,
    about = "diskdb - file-per-collection JSON storage"
)]
struct Cli {
    /// Database options file (TOML)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Pass reads and writes through the compressor
    #[arg(long, global = true)]
    compress: bool,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check whether a collection file is accessible
    Exists(collection::PathArgs),
    /// Print the contents of a collection file
    Read(collection::PathArgs),
    /// Replace the contents of a collection file
    Write(collection::WriteArgs),
    /// Delete a collection file
    Remove(collection::PathArgs),
    /// List the collections in a directory
    List(collection::ListArgs),
    /// Print fresh document metadata
    Meta,
    /// Stamp a JSON object with an id and metadata
    Stamp(document::StampArgs),
}

#[tokio::main]
async fn main() -> ExitCode {
    setup_logging();
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // A corrupt collection is unrecoverable for this process
            if let Some(corrupt) = e.downcast_ref::<CorruptCollection>() {
                eprintln!(
                    "Error parsing the collection file {}: {}",
                    corrupt.path.display(),
                    corrupt.source
                );
            } else {
                eprintln!("error: {:#}", e);
            }
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let mut options = load_options(cli.config.as_deref())?;
    if cli.compress {
        options.compress = true;
    }
    tracing::debug!(?options, "resolved database options");

    let ctx = Context::new(options, cli.format);
    match cli.command {
        Commands::Exists(args) => collection::exists(&ctx, args).await,
        Commands::Read(args) => collection::read(&ctx, args).await,
        Commands::Write(args) => collection::write(&ctx, args).await,
        Commands::Remove(args) => collection::remove(&ctx, args).await,
        Commands::List(args) => collection::list(&ctx, args).await,
        Commands::Meta => document::meta(&ctx),
        Commands::Stamp(args) => document::stamp(&ctx, args),
    }
}

/// Options from `--config`, else `./diskdb.toml` if present, else defaults
fn load_options(config: Option<&Path>) -> Result<DbOptions> {
    if let Some(path) = config {
        return Ok(DbOptions::load(path)?);
    }
    let default_path = Path::new(DEFAULT_CONFIG);
    if default_path.is_file() {
        Ok(DbOptions::load(default_path)?)
    } else {
        Ok(DbOptions::default())
    }
}

fn setup_logging() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}
