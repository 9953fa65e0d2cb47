//! CLI argument definitions using clap.

use clap::Parser;
use std::path::PathBuf;

/// Stockroom: interactive inventory editor
#[derive(Parser)]
#[command(name = "stockroom")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Existing inventory file to open. Omit to create a new one.
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,
}
