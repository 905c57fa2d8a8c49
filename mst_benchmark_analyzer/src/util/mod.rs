//!
//! Utility functions.
//!

#[cfg(test)]
mod tests;

///
/// Rounds `value` to `decimals` decimal places, halfway cases away from zero.
///
/// The rounding is odd-symmetric, so `round(-x, d) == -round(x, d)` holds for every `x`.
///
pub fn round(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

///
/// Builds the error of an enumerated option parsed from an unknown `string`.
///
pub fn unknown_variant<T>(kind: &str, string: &str, supported: &[T]) -> anyhow::Error
where
    T: std::fmt::Display,
{
    anyhow::anyhow!(
        "Unknown {kind} `{string}`. Supported values: {}",
        supported
            .iter()
            .map(|element| element.to_string())
            .collect::<Vec<String>>()
            .join(", ")
    )
}

///
/// Parses `string` as the variant of `supported` displayed the same way, ignoring case.
///
pub fn parse_variant<T>(kind: &str, string: &str, supported: &[T]) -> anyhow::Result<T>
where
    T: Copy + std::fmt::Display,
{
    let lowercase = string.to_lowercase();
    supported
        .iter()
        .copied()
        .find(|variant| variant.to_string() == lowercase)
        .ok_or_else(|| unknown_variant(kind, string, supported))
}
