//! CLI argument definitions.

use clap::{Parser, Subcommand, ValueEnum};

use crate::commands::{CalibrateArgs, ExtrapolateArgs};

/// rfr - Smith-Wilson risk-free rate extrapolation CLI
#[derive(Parser)]
#[command(name = "rfr")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Fit an observed curve and extrapolate it to target maturities
    Extrapolate(ExtrapolateArgs),

    /// Calibrate the convergence speed (alpha) for an observed curve
    Calibrate(CalibrateArgs),
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
    /// Minimal output (just the values)
    Minimal,
}
