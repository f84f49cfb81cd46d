//! CHF Curve Extrapolation Example
//!
//! Extrapolates the EIOPA Swiss franc spot curve (LLP 25 years) out to
//! 150 years with the published parameters:
//!
//! | Parameter | Value      |
//! |-----------|------------|
//! | UFR       | 2.9%       |
//! | Alpha     | 0.128562   |
//! | LLP       | 25Y        |
//!
//! Market Data: EIOPA_RFR_20190531_Term_Structures.xlsx,
//! tab RFR_spot_no_VA, Switzerland.
//!
//! Run with: cargo run --example chf_extrapolation

use rfr_curves::report::FitDiagnostics;
use rfr_curves::smith_wilson::SmithWilson;

fn main() {
    // Observed spot rates for maturities 1..=25 years
    let rates = [
        -0.00803, -0.00814, -0.00778, -0.00725, -0.00652, -0.00565, -0.0048, -0.00391, -0.00313,
        -0.00214, -0.0014, -0.00067, -0.00008, 0.00051, 0.00108, 0.00157, 0.00197, 0.00228,
        0.0025, 0.00264, 0.00271, 0.00274, 0.0028, 0.00291, 0.00309,
    ];
    let tenors: Vec<f64> = (1..=25).map(f64::from).collect();

    println!("===========================================");
    println!("  CHF Curve Extrapolation (Smith-Wilson)");
    println!("  EIOPA parameters as of 2019-05-31");
    println!("===========================================\n");

    let model = SmithWilson::new(0.029, 0.128562).expect("valid parameters");
    let curve = model.fit(&rates, &tenors).expect("fit CHF curve");

    // Extrapolate to 150 years
    let targets: Vec<f64> = (1..=150).map(f64::from).collect();
    let fitted = curve.zero_rates(&targets).expect("evaluate targets");

    println!("{:>8} {:>12} {:>12}", "Maturity", "Rate", "DF");
    println!("{}", "-".repeat(34));
    for (tenor, rate) in targets.iter().zip(&fitted) {
        // Print the observed range and then every 5th year
        if *tenor <= 25.0 || (*tenor as u32) % 5 == 0 {
            let df = curve.discount_factor(*tenor).expect("discount factor");
            println!("{tenor:>7}Y {:>11.4}% {df:>12.6}", rate * 100.0);
        }
    }

    let report = FitDiagnostics::default()
        .run(&curve, &rates, &tenors)
        .expect("diagnostics");
    println!("\n{report}");
}
