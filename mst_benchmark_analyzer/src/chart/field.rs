//!
//! A plottable benchmark record field.
//!

use crate::model::record::Record;

///
/// A plottable benchmark record field.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    /// The elapsed time.
    Ms,
    /// The computed MST weight.
    Output,
    /// The node count.
    N,
    /// The edge count.
    M,
}

impl Field {
    /// All fields in listing order.
    pub const ALL: [Self; 4] = [Self::Ms, Self::Output, Self::N, Self::M];

    ///
    /// Extracts the field value from `record`.
    ///
    pub fn value(&self, record: &Record) -> f64 {
        match self {
            Self::Ms => record.elapsed_ms,
            Self::Output => record.output,
            Self::N => record.node_count as f64,
            Self::M => record.edge_count as f64,
        }
    }
}

impl std::str::FromStr for Field {
    type Err = anyhow::Error;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        crate::util::parse_variant("field", string, &Self::ALL)
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ms => write!(f, "ms"),
            Self::Output => write!(f, "output"),
            Self::N => write!(f, "n"),
            Self::M => write!(f, "m"),
        }
    }
}
