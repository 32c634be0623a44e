//! Summary and diff commands
//!
//! Usage:
//!   domain-audit summary --before <FILE> --after <FILE> [--encoded]
//!   domain-audit diff --before <FILE> --after <FILE> [--encoded] [--format markdown|json]

use clap::{Args, ValueEnum};
use domain_audit_core::diff::{
    compute_change_summary, compute_cluster_failovers, render_failover_summary,
};
use domain_audit_core::model::DomainSnapshot;
use std::path::{Path, PathBuf};

use super::codec::{read_encoded_snapshot, read_json_snapshot};

#[derive(Debug, Args)]
pub struct SnapshotPair {
    /// Snapshot before the mutation
    #[arg(long)]
    pub before: PathBuf,

    /// Snapshot after the mutation
    #[arg(long)]
    pub after: PathBuf,

    /// Inputs are in the stored (compressed) encoding rather than JSON
    #[arg(long)]
    pub encoded: bool,
}

type SnapshotReader = fn(&Path) -> Result<DomainSnapshot, Box<dyn std::error::Error>>;

impl SnapshotPair {
    fn load(&self) -> Result<(DomainSnapshot, DomainSnapshot), Box<dyn std::error::Error>> {
        let read: SnapshotReader = if self.encoded {
            read_encoded_snapshot
        } else {
            read_json_snapshot
        };
        Ok((read(&self.before)?, read(&self.after)?))
    }
}

#[derive(Debug, Args)]
pub struct SummaryArgs {
    #[command(flatten)]
    pub snapshots: SnapshotPair,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DiffFormat {
    Markdown,
    Json,
}

#[derive(Debug, Args)]
pub struct DiffArgs {
    #[command(flatten)]
    pub snapshots: SnapshotPair,

    /// Output format
    #[arg(long, value_enum, default_value_t = DiffFormat::Markdown)]
    pub format: DiffFormat,
}

/// Execute summary command
pub fn execute_summary(args: SummaryArgs) -> Result<(), Box<dyn std::error::Error>> {
    let (before, after) = args.snapshots.load()?;
    let summary = compute_change_summary(&before, &after);
    println!("{}", summary.to_json()?);
    Ok(())
}

/// Execute diff command
pub fn execute_diff(args: DiffArgs) -> Result<(), Box<dyn std::error::Error>> {
    let (before, after) = args.snapshots.load()?;
    let failovers = compute_cluster_failovers(&before, &after);

    match args.format {
        DiffFormat::Markdown => print!("{}", render_failover_summary(&failovers)),
        DiffFormat::Json => println!("{}", serde_json::to_string_pretty(&failovers)?),
    }
    Ok(())
}
