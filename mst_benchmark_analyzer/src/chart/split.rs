//!
//! A node-count threshold splitting datasets in two.
//!

use crate::model::record::Record;

///
/// A node-count threshold splitting datasets in two.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeSplit {
    /// The threshold node count.
    pub threshold: u64,
    /// Whether the threshold itself belongs to the left side.
    pub inclusive: bool,
}

impl NodeSplit {
    ///
    /// A left side of `n <= threshold`.
    ///
    pub fn at_most(threshold: u64) -> Self {
        Self {
            threshold,
            inclusive: true,
        }
    }

    ///
    /// A left side of `n < threshold`.
    ///
    pub fn below(threshold: u64) -> Self {
        Self {
            threshold,
            inclusive: false,
        }
    }

    ///
    /// Whether `record` belongs to the left side.
    ///
    pub fn is_left(&self, record: &Record) -> bool {
        if self.inclusive {
            record.node_count <= self.threshold
        } else {
            record.node_count < self.threshold
        }
    }

    ///
    /// Returns the printable condition of the left side.
    ///
    pub fn left_label(&self) -> String {
        let operator = if self.inclusive { "<=" } else { "<" };
        format!("n {operator} {}", self.threshold)
    }

    ///
    /// Returns the printable condition of the right side.
    ///
    pub fn right_label(&self) -> String {
        let operator = if self.inclusive { ">" } else { ">=" };
        format!("n {operator} {}", self.threshold)
    }
}

///
/// The sides of a split to chart.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// Only the records matching the split.
    Left,
    /// Only the other records.
    Right,
    /// Both sides, as two charts.
    Both,
}

impl Side {
    ///
    /// Whether the left side is charted.
    ///
    pub fn has_left(&self) -> bool {
        matches!(self, Self::Left | Self::Both)
    }

    ///
    /// Whether the right side is charted.
    ///
    pub fn has_right(&self) -> bool {
        matches!(self, Self::Right | Self::Both)
    }
}
