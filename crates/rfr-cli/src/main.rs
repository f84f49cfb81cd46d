//! rfr CLI - Smith-Wilson risk-free rate extrapolation.
//!
//! # Usage
//!
//! ```bash
//! # Extrapolate an observed curve to 150 years
//! rfr extrapolate --tenors 1,2,3,5,10 --rates 1.0,1.2,1.4,1.6,1.8 \
//!     --ufr 3.6 --alpha 0.13 --max-tenor 150
//!
//! # Load observations from a CSV file and calibrate alpha on the fly
//! rfr extrapolate --input rates.csv --ufr 3.6 --calibrate-alpha --report
//!
//! # Just calibrate the convergence speed
//! rfr calibrate --input rates.csv --ufr 3.6
//! ```

use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;
mod error;
mod output;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let format = cli.format;

    match cli.command {
        Commands::Extrapolate(args) => commands::extrapolate::execute(args, format)?,
        Commands::Calibrate(args) => commands::calibrate::execute(args, format)?,
    }

    Ok(())
}
