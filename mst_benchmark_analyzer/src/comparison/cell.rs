//!
//! A computed comparison table cell.
//!

///
/// A computed comparison table cell.
///
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Cell {
    /// A finite value.
    Value(f64),
    /// The value would divide by a zero baseline.
    DivisionByZero,
}

impl Cell {
    /// The printable placeholder for an undefined value.
    pub const DIVISION_BY_ZERO: &'static str = "n/a";

    ///
    /// Returns the value, if defined.
    ///
    pub fn value(&self) -> Option<f64> {
        match self {
            Self::Value(value) => Some(*value),
            Self::DivisionByZero => None,
        }
    }
}

impl From<f64> for Cell {
    fn from(value: f64) -> Self {
        Self::Value(value)
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Value(value) => write!(f, "{value}"),
            Self::DivisionByZero => write!(f, "{}", Self::DIVISION_BY_ZERO),
        }
    }
}

impl serde::Serialize for Cell {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Self::Value(value) => serializer.serialize_f64(*value),
            Self::DivisionByZero => serializer.serialize_none(),
        }
    }
}
