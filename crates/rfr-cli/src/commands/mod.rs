//! Command implementations.

pub mod calibrate;
pub mod extrapolate;

pub use calibrate::CalibrateArgs;
pub use extrapolate::ExtrapolateArgs;

use std::path::Path;

use crate::error::{CliError, CliResult};

/// Parses a comma-separated list of numbers (e.g. "1,2,3,5,10").
pub fn parse_number_list(input: &str) -> CliResult<Vec<f64>> {
    input
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(|item| {
            item.parse::<f64>()
                .map_err(|_| CliError::InvalidNumber(item.to_string()))
        })
        .collect()
}

/// Loads observed (maturity, rate) pairs from a two-column CSV file.
///
/// The first column is the maturity in years, the second the spot rate in
/// percent - the shape of published regulatory rate tables. A header row
/// is expected and skipped.
pub fn load_observations(path: &Path) -> CliResult<(Vec<f64>, Vec<f64>)> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)?;

    let mut tenors = Vec::new();
    let mut rates = Vec::new();

    for result in reader.records() {
        let record = result?;
        let line = record.position().map_or(0, csv::Position::line);

        let tenor: f64 = field(&record, 0, line)?;
        let rate: f64 = field(&record, 1, line)?;

        tenors.push(tenor);
        rates.push(rate);
    }

    if tenors.is_empty() {
        return Err(CliError::EmptyInput);
    }

    Ok((tenors, rates))
}

/// Gathers the observed curve from a file or inline lists, converting rates
/// from percent to decimals.
pub(crate) fn gather_observations(
    tenors: Option<&str>,
    rates: Option<&str>,
    input: Option<&Path>,
) -> CliResult<(Vec<f64>, Vec<f64>)> {
    let (tenors, rates_pct) = if let Some(path) = input {
        load_observations(path)?
    } else {
        let tenors = tenors.ok_or_else(|| CliError::MissingArgument("--tenors or --input".into()))?;
        let rates = rates.ok_or_else(|| CliError::MissingArgument("--rates or --input".into()))?;
        (parse_number_list(tenors)?, parse_number_list(rates)?)
    };

    let rates = rates_pct.iter().map(|rate| rate / 100.0).collect();
    Ok((tenors, rates))
}

fn field(record: &csv::StringRecord, index: usize, line: u64) -> CliResult<f64> {
    let raw = record
        .get(index)
        .ok_or_else(|| CliError::MalformedRecord {
            line,
            reason: format!("missing column {}", index + 1),
        })?;
    raw.parse().map_err(|_| CliError::MalformedRecord {
        line,
        reason: format!("'{raw}' is not a number"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_number_list() {
        let parsed = parse_number_list("1, 2.5,10").unwrap();
        assert_eq!(parsed, vec![1.0, 2.5, 10.0]);
    }

    #[test]
    fn test_parse_number_list_rejects_garbage() {
        assert!(matches!(
            parse_number_list("1,two,3"),
            Err(CliError::InvalidNumber(_))
        ));
    }

    #[test]
    fn test_parse_number_list_ignores_trailing_comma() {
        let parsed = parse_number_list("1,2,").unwrap();
        assert_eq!(parsed.len(), 2);
    }
}
