//!
//! A benchmark file with repeated measurements.
//!

use std::path::PathBuf;

use crate::model::record::Record;

///
/// One benchmark file: a full run of one algorithm over the instance set.
///
#[derive(Debug, Clone, PartialEq)]
pub struct Trial {
    /// The file the records were read from.
    pub path: PathBuf,
    /// The records in file row order.
    pub records: Vec<Record>,
}

impl Trial {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(path: PathBuf, records: Vec<Record>) -> Self {
        Self { path, records }
    }

    ///
    /// Returns the number of rows.
    ///
    pub fn len(&self) -> usize {
        self.records.len()
    }

    ///
    /// Whether the file has no rows.
    ///
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    ///
    /// Whether any output value of `other` is also present in this file.
    ///
    pub fn shares_output_with(&self, other: &Self) -> bool {
        other.records.iter().any(|other| {
            self.records
                .iter()
                .any(|record| record.output == other.output)
        })
    }

    ///
    /// Returns the printable file name.
    ///
    pub fn name(&self) -> String {
        self.path.display().to_string()
    }
}
