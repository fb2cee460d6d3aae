use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tidemark_config::ConnectOptions;

mod commands;
mod utils;
use commands::{cmd_apply, cmd_init, cmd_run, cmd_split, cmd_status};

/// tidemark command-line interface.
#[derive(Parser, Debug)]
#[command(name = "tidemark", author, version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Apply every migration script in the migrations directory, in order.
    Run {
        /// Directory to discover scripts in (defaults to the configured
        /// migrations directory).
        #[arg(long)]
        dir: Option<PathBuf>,
        #[command(flatten)]
        connect: ConnectOptions,
    },
    /// Apply one migration script file.
    Apply {
        /// Path to the migration script.
        file: PathBuf,
        #[command(flatten)]
        connect: ConnectOptions,
    },
    /// Split the combined migration document into individual scripts.
    Split {
        /// Combined document to split (defaults to the configured combined
        /// file inside the migrations directory).
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// Show discovered migration scripts without applying them.
    Status,
    /// Initialize tidemark.json with defaults.
    Init,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Run { dir, connect } => cmd_run(dir, connect).await,
        Commands::Apply { file, connect } => cmd_apply(file, connect).await,
        Commands::Split { file } => cmd_split(file),
        Commands::Status => cmd_status(),
        Commands::Init => cmd_init(),
    }
}
