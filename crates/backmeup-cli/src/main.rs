//! backMeUp CLI - Encrypted, versioned backups into Google Drive
//!
//! Provides two commands:
//! - `backmeup upload <source_path>` - archive, encrypt and upload a file
//!   or every entry of a directory
//! - `backmeup download <remote_name> <destination>` - download, decrypt
//!   and unpack one backup object
//!
//! The process exits non-zero with a single diagnostic line on any
//! failure; nothing is retried.

use clap::{Parser, Subcommand};
use tracing::error;
use tracing_subscriber::EnvFilter;

mod commands;

use commands::{download::DownloadCommand, upload::UploadCommand};

#[derive(Debug, Parser)]
#[command(name = "backmeup", version, about = "Encrypted, versioned backups into Google Drive")]
pub struct Cli {
    /// Verbose output (can be repeated: -v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Archive, encrypt and upload a file or directory
    Upload(UploadCommand),
    /// Download, decrypt and unpack one backup
    Download(DownloadCommand),
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Setup tracing
    let filter = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .init();

    let result = match cli.command {
        Commands::Upload(cmd) => cmd.execute().await,
        Commands::Download(cmd) => cmd.execute().await,
    };

    if let Err(err) = result {
        // One diagnostic line, full context chain, no backtrace
        error!("{err:#}");
        std::process::exit(1);
    }
}
