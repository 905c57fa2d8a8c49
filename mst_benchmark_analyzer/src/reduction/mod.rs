//!
//! Reduction of repeated trials to the fastest measurement per instance.
//!

#[cfg(test)]
mod tests;

use crate::error::Error;
use crate::input::Input;
use crate::model::dataset::Dataset;
use crate::model::record::Record;

///
/// Reduces the benchmark files of one algorithm to one record per instance.
///
/// For every row index, the record with the minimum elapsed time among all files is kept
/// with all its fields, rounded to [`crate::DECIMALS`]. If several files share the minimum,
/// the first one in path order wins.
///
/// An algorithm without files reduces to an empty dataset.
///
pub fn reduce(input: &Input) -> Result<Dataset, Error> {
    let rows = input
        .trials
        .first()
        .map(|trial| trial.len())
        .unwrap_or_default();

    let mut records = Vec::with_capacity(rows);
    for row in 0..rows {
        let mut fastest: Option<&Record> = None;
        for trial in input.trials.iter() {
            let record = trial.records.get(row).ok_or_else(|| {
                Error::schema_mismatch(
                    trial.name(),
                    format!("row {row} is missing, expected {rows} rows"),
                )
            })?;
            match fastest {
                Some(fastest) if fastest.elapsed_ms <= record.elapsed_ms => {}
                _ => fastest = Some(record),
            }
        }
        if let Some(fastest) = fastest {
            records.push(fastest.rounded(crate::DECIMALS));
        }
    }

    Ok(Dataset::new(input.algorithm.clone(), records))
}
