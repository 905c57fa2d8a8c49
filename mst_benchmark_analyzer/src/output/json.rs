//!
//! JSON comparison report.
//!

use crate::comparison::ComparisonTable;

///
/// JSON comparison report.
///
/// Undefined improvements are serialized as `null`.
///
#[derive(Debug, Default)]
pub struct Json {
    /// The JSON string.
    pub content: String,
}

impl TryFrom<&[ComparisonTable]> for Json {
    type Error = anyhow::Error;

    fn try_from(tables: &[ComparisonTable]) -> Result<Self, Self::Error> {
        let content = serde_json::to_string_pretty(tables)
            .map_err(|error| anyhow::anyhow!("Comparison report serializing: {error}"))?;
        Ok(Self { content })
    }
}
