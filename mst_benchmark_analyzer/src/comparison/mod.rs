//!
//! Pairwise comparison of reduced benchmark datasets.
//!


pub mod cell;
pub mod row_index_map;

use crate::error::Error;
use crate::model::dataset::Dataset;
use crate::model::size::RepresentativeSize;
use crate::util::round;

use self::cell::Cell;
use self::row_index_map::RowIndexMap;

///
/// The comparison of two algorithms at the representative sizes.
///
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct ComparisonTable {
    /// The baseline algorithm.
    pub reference: String,
    /// The compared algorithm.
    pub candidate: String,
    /// The column sizes.
    pub sizes: Vec<RepresentativeSize>,
    /// The baseline elapsed times.
    pub reference_values: Vec<f64>,
    /// The compared elapsed times.
    pub candidate_values: Vec<f64>,
    /// The elementwise `reference - candidate`.
    pub differences: Vec<f64>,
    /// The elementwise `100 * (reference - candidate) / reference`.
    pub improvements: Vec<Cell>,
}

impl ComparisonTable {
    /// The difference row label.
    pub const LABEL_DIFFERENCE: &'static str = "Difference";

    /// The improvement row label.
    pub const LABEL_IMPROVEMENT: &'static str = "Improvement %";

    ///
    /// Compares `candidate` against `reference` at `sizes`.
    ///
    /// The row of each size is looked up in `reference` and must hold the same instance
    /// in `candidate`. Differences are rounded to [`crate::DECIMALS`], improvements to
    /// [`crate::DECIMALS_PERCENTAGE`]. An improvement over a zero baseline is recorded as
    /// [`Cell::DivisionByZero`].
    ///
    pub fn compare(
        reference: &Dataset,
        candidate: &Dataset,
        sizes: &[RepresentativeSize],
    ) -> Result<Self, Error> {
        let reference = Self::non_empty(reference)?;
        let candidate = Self::non_empty(candidate)?;
        let map = RowIndexMap::scan(reference, sizes)?;
        Self::compare_at(reference, candidate, &map)
    }

    ///
    /// Compares `candidate` against `reference` at the rows of a prepared mapping.
    ///
    pub fn compare_at(
        reference: &Dataset,
        candidate: &Dataset,
        map: &RowIndexMap,
    ) -> Result<Self, Error> {
        let reference = Self::non_empty(reference)?;
        let candidate = Self::non_empty(candidate)?;

        let columns = map.entries.len();
        let mut table = Self {
            reference: reference.algorithm.clone(),
            candidate: candidate.algorithm.clone(),
            sizes: map.sizes(),
            reference_values: Vec::with_capacity(columns),
            candidate_values: Vec::with_capacity(columns),
            differences: Vec::with_capacity(columns),
            improvements: Vec::with_capacity(columns),
        };

        for (size, index) in map.entries.iter() {
            let reference_record = reference.records.get(*index).ok_or_else(|| {
                Error::schema_mismatch(
                    reference.algorithm.as_str(),
                    format!("row {index} of size {size} is missing"),
                )
            })?;
            let candidate_record = candidate.records.get(*index).ok_or_else(|| {
                Error::schema_mismatch(
                    candidate.algorithm.as_str(),
                    format!("row {index} of size {size} is missing"),
                )
            })?;
            if reference_record.node_count != size.nodes {
                return Err(Error::schema_mismatch(
                    reference.algorithm.as_str(),
                    format!(
                        "row {index} of size {size} holds {} nodes",
                        reference_record.node_count,
                    ),
                ));
            }
            if reference_record.instance() != candidate_record.instance() {
                return Err(Error::schema_mismatch(
                    candidate.algorithm.as_str(),
                    format!(
                        "row {index} of size {size} holds instance {:?}, expected {:?} as in `{}`",
                        candidate_record.instance(),
                        reference_record.instance(),
                        reference.algorithm,
                    ),
                ));
            }

            let reference_value = reference_record.elapsed_ms;
            let candidate_value = candidate_record.elapsed_ms;
            let difference = reference_value - candidate_value;
            let improvement = if reference_value == 0.0 {
                Cell::DivisionByZero
            } else {
                Cell::Value(round(
                    100.0 * difference / reference_value,
                    crate::DECIMALS_PERCENTAGE,
                ))
            };

            table.reference_values.push(reference_value);
            table.candidate_values.push(candidate_value);
            table.differences.push(round(difference, crate::DECIMALS));
            table.improvements.push(improvement);
        }

        Ok(table)
    }

    ///
    /// Returns the improvement at column `size`.
    ///
    pub fn improvement(&self, size: &RepresentativeSize) -> Result<Option<f64>, Error> {
        let index = match self.sizes.iter().position(|column| column == size) {
            Some(index) => index,
            None => return Ok(None),
        };
        match self.improvements[index] {
            Cell::Value(value) => Ok(Some(value)),
            Cell::DivisionByZero => Err(Error::DivisionByZero {
                reference: self.reference.clone(),
                candidate: self.candidate.clone(),
                size: size.to_string(),
            }),
        }
    }

    ///
    /// Returns the first undefined improvement as an error.
    ///
    pub fn check_improvements(&self) -> Result<(), Error> {
        for size in self.sizes.iter() {
            self.improvement(size)?;
        }
        Ok(())
    }

    ///
    /// Returns the header row: an empty corner cell followed by the size labels.
    ///
    pub fn header(&self) -> Vec<String> {
        std::iter::once(String::new())
            .chain(self.sizes.iter().map(|size| size.to_string()))
            .collect()
    }

    ///
    /// Returns the data rows: reference, candidate, difference, improvement.
    ///
    pub fn rows(&self) -> Vec<(String, Vec<Cell>)> {
        let cells = |values: &[f64]| -> Vec<Cell> {
            values.iter().copied().map(Cell::from).collect()
        };
        vec![
            (self.reference.clone(), cells(self.reference_values.as_slice())),
            (self.candidate.clone(), cells(self.candidate_values.as_slice())),
            (
                Self::LABEL_DIFFERENCE.to_owned(),
                cells(self.differences.as_slice()),
            ),
            (
                Self::LABEL_IMPROVEMENT.to_owned(),
                self.improvements.clone(),
            ),
        ]
    }

    ///
    /// Returns the dataset, or an error if it has no instances.
    ///
    fn non_empty(dataset: &Dataset) -> Result<&Dataset, Error> {
        if dataset.is_empty() {
            return Err(Error::missing_algorithm(dataset.algorithm.as_str()));
        }
        Ok(dataset)
    }
}
