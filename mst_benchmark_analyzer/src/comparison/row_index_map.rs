//!
//! The representative size to instance mapping.
//!

use crate::error::Error;
use crate::model::dataset::Dataset;
use crate::model::size::RepresentativeSize;

///
/// Maps every representative size to the row holding the densest instance with that node count.
///
/// The mapping is derived from the instance set once and reused for every dataset sharing it.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowIndexMap {
    /// The sizes and their row indexes, in column order.
    pub entries: Vec<(RepresentativeSize, usize)>,
}

impl RowIndexMap {
    ///
    /// Builds the mapping by scanning `dataset`.
    ///
    pub fn scan(dataset: &Dataset, sizes: &[RepresentativeSize]) -> Result<Self, Error> {
        let entries = sizes
            .iter()
            .map(|size| {
                dataset
                    .row_index_with_max_edges(size.nodes)
                    .map(|index| (size.to_owned(), index))
                    .ok_or_else(|| Error::MissingInstance {
                        algorithm: dataset.algorithm.clone(),
                        nodes: size.nodes,
                    })
            })
            .collect::<Result<Vec<(RepresentativeSize, usize)>, Error>>()?;
        Ok(Self { entries })
    }

    ///
    /// Returns the sizes in column order.
    ///
    pub fn sizes(&self) -> Vec<RepresentativeSize> {
        self.entries.iter().map(|(size, _)| size.to_owned()).collect()
    }

    ///
    /// Returns the row indexes in column order.
    ///
    pub fn indexes(&self) -> Vec<usize> {
        self.entries.iter().map(|(_, index)| *index).collect()
    }
}
