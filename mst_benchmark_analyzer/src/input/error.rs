//!
//! Benchmark input reading error.
//!

use std::path::PathBuf;

///
/// Benchmark input reading error.
///
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Error reading the input file.
    #[error("Reading input file {path:?}: {error}")]
    Reading {
        /// The underlying IO error.
        error: std::io::Error,
        /// The path to the input file.
        path: PathBuf,
    },
    /// Error parsing the input file.
    #[error("Parsing input file {path:?}: {error}")]
    Parsing {
        /// The underlying CSV parsing error.
        error: csv::Error,
        /// The path to the input file.
        path: PathBuf,
    },
    /// Error building the discovery pattern.
    #[error("Input file pattern `{pattern}`: {error}")]
    Pattern {
        /// The underlying pattern error.
        error: glob::PatternError,
        /// The pattern.
        pattern: String,
    },
    /// A measured time is negative or not a number.
    #[error("Input file {path:?} row {row}: elapsed time `{value}` is not a non-negative number")]
    InvalidElapsedTime {
        /// The path to the input file.
        path: PathBuf,
        /// The zero-based data row.
        row: usize,
        /// The rejected value.
        value: f64,
    },
    /// Empty file error.
    #[error("Input file {path:?} is empty")]
    EmptyFile {
        /// The path to the input file.
        path: PathBuf,
    },
}
