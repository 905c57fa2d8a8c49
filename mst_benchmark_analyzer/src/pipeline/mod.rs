//!
//! The benchmark analysis pipeline.
//!
//! The stages form a strict sequence, `Ingested -> Validated -> Reduced`, and each one
//! can only be obtained from the previous one, so comparisons never run on data that
//! has not been validated and reduced.
//!


use std::path::Path;

use crate::comparison::row_index_map::RowIndexMap;
use crate::comparison::ComparisonTable;
use crate::error::Error;
use crate::input::Input;
use crate::model::dataset::Dataset;
use crate::model::size::RepresentativeSize;
use crate::reduction::reduce;
use crate::validation::validate;

///
/// Benchmark files read from disk, not yet checked.
///
#[derive(Debug, Clone)]
pub struct Ingested {
    /// The inputs, one per algorithm, in the requested order.
    inputs: Vec<Input>,
}

impl Ingested {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(inputs: Vec<Input>) -> Self {
        Self { inputs }
    }

    ///
    /// Reads the benchmark files of every algorithm from `directory`.
    ///
    pub fn from_directory<S>(
        directory: &Path,
        algorithms: &[S],
        parallel: bool,
    ) -> Result<Self, Error>
    where
        S: AsRef<str>,
    {
        let inputs = algorithms
            .iter()
            .map(|algorithm| Input::discover(directory, algorithm.as_ref(), parallel))
            .collect::<Result<Vec<Input>, _>>()?;
        Ok(Self::new(inputs))
    }

    ///
    /// Returns the inputs.
    ///
    pub fn inputs(&self) -> &[Input] {
        self.inputs.as_slice()
    }

    ///
    /// Checks the consistency of all inputs.
    ///
    pub fn validate(self) -> Result<Validated, Error> {
        validate(self.inputs.as_slice())?;
        Ok(Validated {
            inputs: self.inputs,
        })
    }
}

///
/// Benchmark files known to be mutually consistent.
///
#[derive(Debug, Clone)]
pub struct Validated {
    /// The inputs, one per algorithm, in the requested order.
    inputs: Vec<Input>,
}

impl Validated {
    ///
    /// Returns the inputs.
    ///
    pub fn inputs(&self) -> &[Input] {
        self.inputs.as_slice()
    }

    ///
    /// Reduces every algorithm to its fastest measurements.
    ///
    pub fn reduce(self) -> Result<Reduced, Error> {
        let datasets = self
            .inputs
            .iter()
            .map(reduce)
            .collect::<Result<Vec<Dataset>, Error>>()?;
        Ok(Reduced { datasets })
    }
}

///
/// One reduced dataset per algorithm.
///
#[derive(Debug, Clone)]
pub struct Reduced {
    /// The datasets, one per algorithm, in the requested order.
    datasets: Vec<Dataset>,
}

impl Reduced {
    ///
    /// Returns all datasets, including empty ones.
    ///
    pub fn datasets(&self) -> &[Dataset] {
        self.datasets.as_slice()
    }

    ///
    /// Returns the dataset of `algorithm`.
    ///
    /// Fails if the algorithm was not ingested or had no benchmark files.
    ///
    pub fn dataset(&self, algorithm: &str) -> Result<&Dataset, Error> {
        self.datasets
            .iter()
            .find(|dataset| dataset.algorithm == algorithm)
            .filter(|dataset| !dataset.is_empty())
            .ok_or_else(|| Error::missing_algorithm(algorithm))
    }

    ///
    /// Returns the datasets of `algorithms`, in the given order.
    ///
    pub fn select<S>(&self, algorithms: &[S]) -> Result<Vec<&Dataset>, Error>
    where
        S: AsRef<str>,
    {
        algorithms
            .iter()
            .map(|algorithm| self.dataset(algorithm.as_ref()))
            .collect()
    }

    ///
    /// Compares `candidate` against `reference` at `sizes`.
    ///
    pub fn compare(
        &self,
        reference: &str,
        candidate: &str,
        sizes: &[RepresentativeSize],
    ) -> Result<ComparisonTable, Error> {
        let reference = self.dataset(reference)?;
        let candidate = self.dataset(candidate)?;
        ComparisonTable::compare(reference, candidate, sizes)
    }

    ///
    /// Compares every pair in `comparisons` at `sizes`.
    ///
    /// The size mapping is scanned once from the first reference dataset and reused,
    /// as validation guarantees every algorithm shares the instance set.
    ///
    pub fn compare_all<S>(
        &self,
        comparisons: &[(S, S)],
        sizes: &[RepresentativeSize],
    ) -> Result<Vec<ComparisonTable>, Error>
    where
        S: AsRef<str>,
    {
        let map = match comparisons.first() {
            Some((reference, _)) => RowIndexMap::scan(self.dataset(reference.as_ref())?, sizes)?,
            None => return Ok(Vec::new()),
        };

        let mut tables = Vec::with_capacity(comparisons.len());
        for (reference, candidate) in comparisons.iter() {
            let reference = self.dataset(reference.as_ref())?;
            let candidate = self.dataset(candidate.as_ref())?;
            tables.push(ComparisonTable::compare_at(reference, candidate, &map)?);
        }
        Ok(tables)
    }
}
