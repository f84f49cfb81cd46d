//! Extrapolate command implementation.
//!
//! Fits a Smith-Wilson curve to the observed rates and evaluates it at the
//! target maturities.

use std::path::PathBuf;

use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use rfr_curves::calibration::fit_convergence_speed;
use rfr_curves::report::FitDiagnostics;
use rfr_curves::smith_wilson::SmithWilson;

use crate::cli::OutputFormat;
use crate::commands::{gather_observations, parse_number_list};
use crate::error::CliError;
use crate::output::{print_info, print_output};

/// Arguments for the extrapolate command.
#[derive(Args, Debug)]
pub struct ExtrapolateArgs {
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

    /// Convergence speed parameter
    #[arg(short, long, conflicts_with = "calibrate_alpha")]
    pub alpha: Option<f64>,

    /// Calibrate alpha to the EIOPA convergence criterion instead of supplying it
    #[arg(long)]
    pub calibrate_alpha: bool,

    /// Target maturities in years (comma-separated). Defaults to an annual grid
    #[arg(long, conflicts_with = "max_tenor")]
    pub targets: Option<String>,

    /// Furthest maturity of the annual target grid
    #[arg(long, default_value = "150")]
    pub max_tenor: u32,

    /// Append the fit diagnostics report
    #[arg(long)]
    pub report: bool,
}

/// A single fitted curve point.
#[derive(Debug, Serialize, Tabled)]
struct CurvePoint {
    /// Maturity in years.
    #[tabled(rename = "Maturity")]
    maturity: f64,
    /// Fitted zero rate in percent.
    #[tabled(rename = "Zero Rate (%)")]
    #[serde(rename = "zero_rate_pct")]
    rate: String,
    /// Fitted discount factor.
    #[tabled(rename = "Discount Factor")]
    #[serde(rename = "discount_factor")]
    price: String,
}

/// Executes the extrapolate command.
pub fn execute(args: ExtrapolateArgs, format: OutputFormat) -> anyhow::Result<()> {
    let (tenors, rates) = gather_observations(
        args.tenors.as_deref(),
        args.rates.as_deref(),
        args.input.as_deref(),
    )?;
    let ufr = args.ufr / 100.0;

    let alpha = if args.calibrate_alpha {
        let calibrated = fit_convergence_speed(&rates, &tenors, ufr)?;
        print_info(&format!("calibrated alpha: {calibrated:.6}"));
        calibrated
    } else {
        args.alpha
            .ok_or_else(|| CliError::MissingArgument("--alpha or --calibrate-alpha".into()))?
    };

    let targets = match &args.targets {
        Some(list) => parse_number_list(list)?,
        None => (1..=args.max_tenor).map(f64::from).collect(),
    };

    let curve = SmithWilson::new(ufr, alpha)?.fit(&rates, &tenors)?;
    let fitted = curve.zero_rates(&targets)?;
    let prices = curve.discount_factors(&targets)?;

    let points: Vec<CurvePoint> = targets
        .iter()
        .zip(fitted.iter().zip(&prices))
        .map(|(&maturity, (&rate, &price))| CurvePoint {
            maturity,
            rate: format!("{:.4}", rate * 100.0),
            price: format!("{price:.6}"),
        })
        .collect();

    print_output(&points, format)?;

    if args.report {
        let report = FitDiagnostics::default().run(&curve, &rates, &tenors)?;
        println!("\n{report}");
    }

    Ok(())
}
