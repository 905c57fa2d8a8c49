//!
//! A named chart series.
//!

use crate::chart::field::Field;
use crate::model::dataset::Dataset;

///
/// A named chart series.
///
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Series {
    /// The algorithm identifier.
    pub name: String,
    /// The `(x, y)` points in dataset order.
    pub points: Vec<(f64, f64)>,
}

impl Series {
    ///
    /// Projects `dataset` onto the `x` and `y` fields.
    ///
    pub fn new(dataset: &Dataset, x: Field, y: Field) -> Self {
        Self {
            name: dataset.algorithm.clone(),
            points: dataset
                .records
                .iter()
                .map(|record| (x.value(record), y.value(record)))
                .collect(),
        }
    }
}
