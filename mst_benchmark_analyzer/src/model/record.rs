//!
//! A single benchmark trial.
//!

use crate::util::round;

///
/// A single benchmark trial: one algorithm measured once on one instance.
///
/// Field names follow the benchmark file header `ms;output;n;m;filename`.
///
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Record {
    /// The elapsed time in milliseconds.
    #[serde(rename = "ms")]
    pub elapsed_ms: f64,
    /// The computed result, usually the total MST weight.
    pub output: f64,
    /// The number of nodes of the instance.
    #[serde(rename = "n")]
    pub node_count: u64,
    /// The number of edges of the instance.
    #[serde(rename = "m")]
    pub edge_count: u64,
    /// The instance the trial was measured on, kept for traceability.
    #[serde(rename = "filename")]
    pub source_label: String,
}

impl Record {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(
        elapsed_ms: f64,
        output: f64,
        node_count: u64,
        edge_count: u64,
        source_label: String,
    ) -> Self {
        Self {
            elapsed_ms,
            output,
            node_count,
            edge_count,
            source_label,
        }
    }

    ///
    /// Returns the `(node_count, edge_count)` pair identifying the instance.
    ///
    pub fn instance(&self) -> (u64, u64) {
        (self.node_count, self.edge_count)
    }

    ///
    /// Returns a copy with numeric values rounded to `decimals`.
    ///
    pub fn rounded(&self, decimals: u32) -> Self {
        Self {
            elapsed_ms: round(self.elapsed_ms, decimals),
            output: round(self.output, decimals),
            node_count: self.node_count,
            edge_count: self.edge_count,
            source_label: self.source_label.clone(),
        }
    }
}
