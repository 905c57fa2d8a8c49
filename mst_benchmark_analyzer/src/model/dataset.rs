//!
//! The reduced benchmark dataset of an algorithm.
//!

use crate::model::record::Record;

///
/// The reduced benchmark dataset of an algorithm: one record per instance, in instance order.
///
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Dataset {
    /// The algorithm identifier.
    pub algorithm: String,
    /// The records, one per instance.
    pub records: Vec<Record>,
}

impl Dataset {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(algorithm: String, records: Vec<Record>) -> Self {
        Self { algorithm, records }
    }

    ///
    /// Returns the number of instances.
    ///
    pub fn len(&self) -> usize {
        self.records.len()
    }

    ///
    /// Whether the dataset has no instances.
    ///
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    ///
    /// Returns the index of the densest instance with exactly `nodes` nodes.
    ///
    /// Among instances with the same maximum edge count, the lowest index wins.
    ///
    pub fn row_index_with_max_edges(&self, nodes: u64) -> Option<usize> {
        let mut best: Option<(usize, u64)> = None;
        for (index, record) in self.records.iter().enumerate() {
            if record.node_count != nodes {
                continue;
            }
            match best {
                Some((_, edges)) if edges >= record.edge_count => {}
                _ => best = Some((index, record.edge_count)),
            }
        }
        best.map(|(index, _)| index)
    }

    ///
    /// Splits the dataset into the records matching `predicate` and the rest.
    ///
    pub fn partition<P>(&self, predicate: P) -> (Self, Self)
    where
        P: Fn(&Record) -> bool,
    {
        let (matching, rest): (Vec<Record>, Vec<Record>) = self
            .records
            .iter()
            .cloned()
            .partition(|record| predicate(record));
        (
            Self::new(self.algorithm.clone(), matching),
            Self::new(self.algorithm.clone(), rest),
        )
    }
}
