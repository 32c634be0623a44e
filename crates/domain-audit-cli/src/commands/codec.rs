//! Snapshot codec commands
//!
//! Usage:
//!   domain-audit encode --input <JSON> --output <FILE>
//!   domain-audit decode --input <FILE> [--output <JSON>]

use clap::Args;
use domain_audit_core::codec::{decompress_and_deserialize, serialize_and_compress};
use domain_audit_core::model::DomainSnapshot;
use std::path::{Path, PathBuf};

#[derive(Debug, Args)]
pub struct EncodeArgs {
    /// Snapshot JSON file
    #[arg(short, long)]
    pub input: PathBuf,

    /// Destination for the encoded bytes
    #[arg(short, long)]
    pub output: PathBuf,
}

#[derive(Debug, Args)]
pub struct DecodeArgs {
    /// Encoded snapshot file
    #[arg(short, long)]
    pub input: PathBuf,

    /// Output file path (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Execute encode command
pub fn execute_encode(args: EncodeArgs) -> Result<(), Box<dyn std::error::Error>> {
    let snapshot = read_json_snapshot(&args.input)?;
    let bytes = serialize_and_compress(&snapshot)?;
    std::fs::write(&args.output, &bytes)?;
    println!("✓ Encoded {} bytes to {}", bytes.len(), args.output.display());
    Ok(())
}

/// Execute decode command
pub fn execute_decode(args: DecodeArgs) -> Result<(), Box<dyn std::error::Error>> {
    let snapshot = read_encoded_snapshot(&args.input)?;
    let json = serde_json::to_string_pretty(&snapshot)?;

    if let Some(output_path) = args.output {
        std::fs::write(&output_path, json)?;
        println!("✓ Decoded to {}", output_path.display());
    } else {
        println!("{}", json);
    }
    Ok(())
}

pub fn read_json_snapshot(path: &Path) -> Result<DomainSnapshot, Box<dyn std::error::Error>> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| format!("cannot read {}: {}", path.display(), e))?;
    let snapshot: DomainSnapshot = serde_json::from_str(&text)
        .map_err(|e| format!("{} is not a snapshot document: {}", path.display(), e))?;
    Ok(snapshot)
}

pub fn read_encoded_snapshot(path: &Path) -> Result<DomainSnapshot, Box<dyn std::error::Error>> {
    let bytes = std::fs::read(path).map_err(|e| format!("cannot read {}: {}", path.display(), e))?;
    Ok(decompress_and_deserialize(&bytes)?)
}
