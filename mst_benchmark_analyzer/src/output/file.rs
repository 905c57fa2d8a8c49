//!
//! Represents a single output file in a set of many.
//!

use std::path::PathBuf;

///
/// Represents a single output file in a set of many.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct File {
    /// Path to this file relative to user-provided root.
    pub path: PathBuf,
    /// File content.
    pub content: String,
}

impl File {
    ///
    /// A shortcut constructor.
    ///
    pub fn new<P>(path: P, content: String) -> Self
    where
        P: Into<PathBuf>,
    {
        Self {
            path: path.into(),
            content,
        }
    }

    ///
    /// Create a new file instance with an object serialized to JSON.
    ///
    pub fn json<S, V>(stem: S, object: &V) -> anyhow::Result<Self>
    where
        S: std::fmt::Display,
        V: serde::Serialize,
    {
        let path = format!("{stem}.{}", crate::EXTENSION_JSON);
        let content = serde_json::to_string_pretty(object)
            .map_err(|error| anyhow::anyhow!("Output file {path:?} serializing: {error}"))?;
        Ok(Self::new(path, content))
    }
}
