//! Domain audit CLI
//!
//! Offline inspection of domain snapshots: encode and decode the stored
//! snapshot format, and compute change summaries and failover diffs.

use clap::{Parser, Subcommand};
use domain_audit_core::logging_facility::{self, Profile};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "domain-audit")]
#[command(about = "Domain failover audit trail tools", long_about = None)]
struct Cli {
    /// Emit logs to stderr: `human` or `json`
    #[arg(long, global = true)]
    log_format: Option<Profile>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Compress a JSON snapshot into the stored encoding
    Encode(commands::codec::EncodeArgs),
    /// Decode a stored snapshot back to JSON
    Decode(commands::codec::DecodeArgs),
    /// Compute the change summary between two snapshots
    Summary(commands::diff::SummaryArgs),
    /// List every active-cluster transition between two snapshots
    Diff(commands::diff::DiffArgs),
}

fn main() {
    let cli = Cli::parse();

    if let Some(profile) = cli.log_format {
        logging_facility::init(profile);
    }

    let result = match cli.command {
        Commands::Encode(args) => commands::codec::execute_encode(args),
        Commands::Decode(args) => commands::codec::execute_decode(args),
        Commands::Summary(args) => commands::diff::execute_summary(args),
        Commands::Diff(args) => commands::diff::execute_diff(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
