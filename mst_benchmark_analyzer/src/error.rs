//!
//! The benchmark analysis error.
//!

///
/// The benchmark analysis error.
///
/// Every variant aborts the current pipeline run.
///
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Benchmark files disagree on their shape.
    #[error("Schema mismatch in {origin}: {reason}")]
    SchemaMismatch {
        /// The file or dataset where the mismatch was found.
        origin: String,
        /// The mismatch description.
        reason: String,
    },
    /// Benchmark files disagree on the computed MST.
    #[error("The benchmark files have different MST outputs: {origin} shares no output with {baseline}")]
    ResultMismatch {
        /// The file all others are checked against.
        baseline: String,
        /// The disagreeing file.
        origin: String,
    },
    /// An algorithm has no benchmark files.
    #[error("Algorithm `{algorithm}` has no benchmark data")]
    MissingAlgorithm {
        /// The algorithm identifier.
        algorithm: String,
    },
    /// A dataset has no instance with the requested node count.
    #[error("Algorithm `{algorithm}` has no instance with {nodes} nodes")]
    MissingInstance {
        /// The algorithm identifier.
        algorithm: String,
        /// The requested node count.
        nodes: u64,
    },
    /// A percentage improvement has a zero baseline.
    #[error("Improvement of `{candidate}` over `{reference}` at {size} divides by a zero baseline")]
    DivisionByZero {
        /// The baseline algorithm.
        reference: String,
        /// The compared algorithm.
        candidate: String,
        /// The representative size label.
        size: String,
    },
    /// Benchmark files could not be read.
    #[error(transparent)]
    Input(#[from] crate::input::error::Error),
}

impl Error {
    ///
    /// A shortcut constructor.
    ///
    pub fn schema_mismatch<O, R>(origin: O, reason: R) -> Self
    where
        O: ToString,
        R: ToString,
    {
        Self::SchemaMismatch {
            origin: origin.to_string(),
            reason: reason.to_string(),
        }
    }

    ///
    /// A shortcut constructor.
    ///
    pub fn missing_algorithm(algorithm: &str) -> Self {
        Self::MissingAlgorithm {
            algorithm: algorithm.to_owned(),
        }
    }
}
