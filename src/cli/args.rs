use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "recto")]
#[command(version, about = "Pairwise relation analyzer for axis-aligned rectangles", long_about = None)]
pub struct CliArgs {
    /// Path to the JSON file containing the rectangle definitions
    #[arg(short, long, value_name = "FILE", default_value = "rectangles.json")]
    pub json: PathBuf,

    /// Report output format [default: text]
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable listing, one block per rectangle
    #[default]
    Text,
    /// Machine-readable JSON report
    Json,
}
