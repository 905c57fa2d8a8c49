//!
//! Table rendering format.
//!

///
/// Table rendering format.
///
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    #[default]
    /// Bordered plain text grid.
    Plain,
    /// LaTeX `tabular` environment.
    Latex,
}

impl Format {
    /// All formats in listing order.
    pub const ALL: [Self; 2] = [Self::Plain, Self::Latex];
}

impl std::str::FromStr for Format {
    type Err = anyhow::Error;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        crate::util::parse_variant("table format", string, &Self::ALL)
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Format::Plain => write!(f, "plain"),
            Format::Latex => write!(f, "latex"),
        }
    }
}
