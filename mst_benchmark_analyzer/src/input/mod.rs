//!
//! Benchmark input discovery and parsing.
//!

#[cfg(test)]
mod tests;

pub mod error;

use std::path::Path;
use std::path::PathBuf;

use rayon::iter::IntoParallelRefIterator;
use rayon::iter::ParallelIterator;

use crate::model::record::Record;
use crate::model::trial::Trial;

use self::error::Error as InputError;

///
/// All benchmark files of one algorithm.
///
#[derive(Debug, Clone, PartialEq)]
pub struct Input {
    /// The algorithm identifier.
    pub algorithm: String,
    /// The parsed files, ordered by path.
    pub trials: Vec<Trial>,
}

impl Input {
    /// The benchmark file field delimiter.
    pub const DELIMITER: u8 = b';';

    ///
    /// A shortcut constructor.
    ///
    pub fn new(algorithm: String, trials: Vec<Trial>) -> Self {
        Self { algorithm, trials }
    }

    ///
    /// Reads all benchmark files of `algorithm` in `directory`.
    ///
    /// A file belongs to `algorithm` if its name starts with the identifier and the next
    /// character, if any, is not a letter: `KruskalUnionFind_1.csv` belongs to
    /// `KruskalUnionFind`, `KruskalUnionFindCompressed_1.csv` does not.
    ///
    /// Files are parsed in parallel if `parallel` is set, but the result is always ordered
    /// by path. No matching files is not an error, but any unreadable, empty, or invalid
    /// file is.
    ///
    pub fn discover(directory: &Path, algorithm: &str, parallel: bool) -> Result<Self, InputError> {
        let paths = Self::matching_paths(directory, algorithm)?;

        let trials = if parallel {
            paths
                .par_iter()
                .map(|path| Self::read(path.as_path()))
                .collect::<Result<Vec<Trial>, InputError>>()?
        } else {
            paths
                .iter()
                .map(|path| Self::read(path.as_path()))
                .collect::<Result<Vec<Trial>, InputError>>()?
        };

        Ok(Self::new(algorithm.to_owned(), trials))
    }

    ///
    /// Returns the sorted paths of the benchmark files of `algorithm` in `directory`.
    ///
    pub fn matching_paths(directory: &Path, algorithm: &str) -> Result<Vec<PathBuf>, InputError> {
        let pattern = format!(
            "{}/{}*.{}",
            glob::Pattern::escape(directory.to_string_lossy().as_ref()),
            glob::Pattern::escape(algorithm),
            crate::EXTENSION_CSV,
        );
        let paths = glob::glob(pattern.as_str()).map_err(|error| InputError::Pattern {
            error,
            pattern: pattern.clone(),
        })?;

        let mut paths: Vec<PathBuf> = paths
            .filter_map(Result::ok)
            .filter(|path| path.is_file())
            .filter(|path| Self::belongs_to(path.as_path(), algorithm))
            .collect();
        paths.sort();
        Ok(paths)
    }

    ///
    /// Reads a benchmark file.
    ///
    /// A blank file is an error rather than a trial with no rows, as is any row with
    /// a negative or non-finite elapsed time.
    ///
    pub fn read(path: &Path) -> Result<Trial, InputError> {
        let text = std::fs::read_to_string(path).map_err(|error| InputError::Reading {
            error,
            path: path.to_path_buf(),
        })?;
        if text.trim().is_empty() {
            return Err(InputError::EmptyFile {
                path: path.to_path_buf(),
            });
        }
        let records = Self::parse(text.as_bytes()).map_err(|error| InputError::Parsing {
            error,
            path: path.to_path_buf(),
        })?;
        if let Some((row, record)) = records
            .iter()
            .enumerate()
            .find(|(_, record)| !record.elapsed_ms.is_finite() || record.elapsed_ms < 0.0)
        {
            return Err(InputError::InvalidElapsedTime {
                path: path.to_path_buf(),
                row,
                value: record.elapsed_ms,
            });
        }
        Ok(Trial::new(path.to_path_buf(), records))
    }

    ///
    /// Parses benchmark records in file row order.
    ///
    pub fn parse<R>(reader: R) -> Result<Vec<Record>, csv::Error>
    where
        R: std::io::Read,
    {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(Self::DELIMITER)
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);
        reader.deserialize::<Record>().collect()
    }

    ///
    /// Whether the file at `path` holds benchmarks of `algorithm`.
    ///
    fn belongs_to(path: &Path, algorithm: &str) -> bool {
        let name = match path.file_name() {
            Some(name) => name.to_string_lossy(),
            None => return false,
        };
        match name.strip_prefix(algorithm) {
            Some(rest) => !rest.starts_with(|character: char| character.is_alphabetic()),
            None => false,
        }
    }
}
