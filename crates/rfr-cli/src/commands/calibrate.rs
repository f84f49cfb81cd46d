//! Calibrate command implementation.
//!
//! Searches for the smallest convergence speed (alpha) that meets the
//! EIOPA one-basis-point criterion at the convergence point.

use std::path::PathBuf;

use clap::Args;

use rfr_curves::calibration::{convergence_gap, convergence_point, fit_convergence_speed};

use crate::cli::OutputFormat;
use crate::commands::gather_observations;
use crate::output::{print_output, KeyValue};

/// Arguments for the calibrate command.
#[derive(Args, Debug)]
pub struct CalibrateArgs {
    /// Observed maturities in years (comma-separated, e.g. "1,2,3,5,10")
    #[arg(short, long)]
    pub tenors: Option<String>,

    /// Observed spot rates in percent (comma-separated, e.g. "1.0,1.2,1.5")
    #[arg(short = 'z', long)]
    pub rates: Option<String>,

    /// Two-column CSV file (maturity, rate in percent) instead of inline lists
    #[arg(short, long, conflicts_with_all = ["tenors", "rates"])]
    pub input: Option<PathBuf>,

    /// Ultimate Forward Rate in percent
    #[arg(short, long)]
    pub ufr: f64,
}

/// Executes the calibrate command.
pub fn execute(args: CalibrateArgs, format: OutputFormat) -> anyhow::Result<()> {
    let (tenors, rates) = gather_observations(
        args.tenors.as_deref(),
        args.rates.as_deref(),
        args.input.as_deref(),
    )?;
    let ufr = args.ufr / 100.0;

    let alpha = fit_convergence_speed(&rates, &tenors, ufr)?;
    let gap = convergence_gap(&rates, &tenors, ufr, alpha)?;

    let llp = tenors.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let point = convergence_point(llp);

    let rows = vec![
        KeyValue::new("Alpha", format!("{alpha:.6}")),
        KeyValue::new("Last Liquid Point", format!("{llp:.1}Y")),
        KeyValue::new("Convergence Point", format!("{point:.1}Y")),
        KeyValue::new("Convergence Gap", format!("{:.4} bps", gap * 10_000.0)),
    ];

    print_output(&rows, format)?;

    Ok(())
}
