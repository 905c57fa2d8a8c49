//!
//! The representative instance size.
//!

#[cfg(test)]
mod tests;

///
/// The representative instance size, a node-count threshold comparisons are reported at.
///
/// Written either as a plain node count (`250`) or in thousands (`8k`).
///
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RepresentativeSize {
    /// The label as written by the user, e.g. `8k`.
    pub label: String,
    /// The node count the label stands for.
    pub nodes: u64,
}

impl RepresentativeSize {
    /// The thousands suffix.
    pub const SUFFIX_THOUSANDS: char = 'k';

    /// The sizes of the reference instance set.
    pub const REFERENCE: [&'static str; 6] = ["8k", "10k", "20k", "40k", "80k", "100k"];

    ///
    /// A shortcut constructor.
    ///
    pub fn new(label: String, nodes: u64) -> Self {
        Self { label, nodes }
    }

    ///
    /// Returns the sizes of the reference instance set.
    ///
    pub fn reference() -> Vec<Self> {
        Self::REFERENCE
            .iter()
            .filter_map(|label| label.parse().ok())
            .collect()
    }
}

impl std::str::FromStr for RepresentativeSize {
    type Err = anyhow::Error;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        let label = string.trim();
        let (digits, multiplier) = match label.strip_suffix(Self::SUFFIX_THOUSANDS) {
            Some(digits) => (digits, 1000),
            None => (label, 1),
        };
        let nodes = digits
            .parse::<u64>()
            .ok()
            .and_then(|value| value.checked_mul(multiplier))
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "Invalid representative size `{string}`. Expected a node count like `250` or `8k`"
                )
            })?;
        Ok(Self::new(label.to_owned(), nodes))
    }
}

impl std::fmt::Display for RepresentativeSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label)
    }
}

impl serde::Serialize for RepresentativeSize {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.label.as_str())
    }
}
