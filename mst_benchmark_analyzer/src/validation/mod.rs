//!
//! Cross-file consistency checks run before any reduction.
//!


use crate::error::Error;
use crate::input::Input;
use crate::model::trial::Trial;

///
/// Checks that the benchmark files of all algorithms describe the same instance set
/// and agree on the computed MST.
///
/// The checks run in order: row count across all files, instance alignment within
/// each algorithm, output agreement across all files.
///
pub fn validate(inputs: &[Input]) -> Result<(), Error> {
    let trials: Vec<&Trial> = inputs.iter().flat_map(|input| input.trials.iter()).collect();

    check_same_row_count(trials.as_slice())?;
    for input in inputs.iter() {
        check_same_instances(input)?;
    }
    check_same_outputs(trials.as_slice())?;

    Ok(())
}

///
/// Checks that every file has the same number of rows.
///
pub fn check_same_row_count(trials: &[&Trial]) -> Result<(), Error> {
    let baseline = match trials.first() {
        Some(baseline) => baseline,
        None => return Ok(()),
    };

    for trial in trials.iter().skip(1) {
        if trial.len() != baseline.len() {
            return Err(Error::schema_mismatch(
                trial.name(),
                format!(
                    "the benchmark files have different number of rows: {} in {}, {} here",
                    baseline.len(),
                    baseline.name(),
                    trial.len(),
                ),
            ));
        }
    }

    Ok(())
}

///
/// Checks that the files of one algorithm report the same `(n, m)` pair at every row.
///
pub fn check_same_instances(input: &Input) -> Result<(), Error> {
    let baseline = match input.trials.first() {
        Some(baseline) => baseline,
        None => return Ok(()),
    };

    for trial in input.trials.iter().skip(1) {
        for (row, (expected, found)) in baseline
            .records
            .iter()
            .zip(trial.records.iter())
            .enumerate()
        {
            if expected.instance() != found.instance() {
                let (expected_nodes, expected_edges) = expected.instance();
                let (found_nodes, found_edges) = found.instance();
                return Err(Error::schema_mismatch(
                    trial.name(),
                    format!(
                        "row {row} holds instance (n={found_nodes}, m={found_edges}), expected (n={expected_nodes}, m={expected_edges}) as in {}",
                        baseline.name(),
                    ),
                ));
            }
        }
    }

    Ok(())
}

///
/// Checks that every file shares at least one output value with the first one.
///
/// Files without rows have nothing to disagree on and are skipped.
///
pub fn check_same_outputs(trials: &[&Trial]) -> Result<(), Error> {
    let baseline = match trials.first() {
        Some(baseline) if !baseline.is_empty() => baseline,
        _ => return Ok(()),
    };

    for trial in trials.iter().skip(1) {
        if trial.is_empty() {
            continue;
        }
        if !baseline.shares_output_with(trial) {
            return Err(Error::ResultMismatch {
                baseline: baseline.name(),
                origin: trial.name(),
            });
        }
    }

    Ok(())
}
