//!
//! Comparison report format.
//!

///
/// Comparison report format.
///
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    #[default]
    /// JSON array of comparison tables.
    Json,
    /// Excel spreadsheet with one worksheet per comparison.
    Xlsx,
}

impl Format {
    /// All formats in listing order.
    pub const ALL: [Self; 2] = [Self::Json, Self::Xlsx];
}

impl std::str::FromStr for Format {
    type Err = anyhow::Error;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        crate::util::parse_variant("report format", string, &Self::ALL)
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Format::Json => write!(f, "json"),
            Format::Xlsx => write!(f, "xlsx"),
        }
    }
}
