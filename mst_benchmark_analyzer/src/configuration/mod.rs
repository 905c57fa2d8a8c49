//!
//! The analysis configuration.
//!


use std::path::PathBuf;

use crate::chart::set::ChartSet;
use crate::model::algorithm;
use crate::model::size::RepresentativeSize;
use crate::output::format::Format as ReportFormat;
use crate::output::table::format::Format as TableFormat;

///
/// The analysis configuration.
///
/// Defaults reproduce the reference study over the five reference algorithms.
///
#[derive(Debug, Clone, PartialEq)]
pub struct Configuration {
    /// The directory with benchmark files.
    pub input_directory: PathBuf,
    /// The algorithms to ingest, in order.
    pub algorithms: Vec<String>,
    /// The `(reference, candidate)` pairs to compare.
    pub comparisons: Vec<(String, String)>,
    /// The representative sizes comparisons are reported at.
    pub sizes: Vec<RepresentativeSize>,
    /// The terminal table format.
    pub table_format: TableFormat,
    /// The chart sets to build.
    pub chart_sets: Vec<ChartSet>,
    /// The chart data directory.
    pub chart_directory: Option<PathBuf>,
    /// The comparison report path.
    pub report_path: Option<PathBuf>,
    /// The comparison report format.
    pub report_format: ReportFormat,
    /// The reduced dataset export directory.
    pub export_directory: Option<PathBuf>,
    /// Whether LaTeX tables are exported along with CSV files.
    pub export_latex: bool,
    /// Whether trial files are parsed in parallel.
    pub parallel: bool,
    /// Whether progress and warnings are suppressed.
    pub quiet: bool,
}

impl Configuration {
    /// The separator between the algorithms of a comparison pair.
    pub const COMPARISON_SEPARATOR: char = ':';

    ///
    /// A shortcut constructor with the reference study defaults.
    ///
    pub fn new(input_directory: PathBuf) -> Self {
        Self {
            input_directory,
            algorithms: algorithm::ALL
                .iter()
                .map(|algorithm| algorithm.to_string())
                .collect(),
            comparisons: algorithm::COMPARISONS
                .iter()
                .map(|(reference, candidate)| (reference.to_string(), candidate.to_string()))
                .collect(),
            sizes: RepresentativeSize::reference(),
            table_format: TableFormat::default(),
            chart_sets: Vec::new(),
            chart_directory: None,
            report_path: None,
            report_format: ReportFormat::default(),
            export_directory: None,
            export_latex: false,
            parallel: false,
            quiet: false,
        }
    }

    ///
    /// Parses a comparison pair written as `Reference:Candidate`.
    ///
    pub fn parse_comparison(string: &str) -> anyhow::Result<(String, String)> {
        match string.split_once(Self::COMPARISON_SEPARATOR) {
            Some((reference, candidate))
                if !reference.trim().is_empty() && !candidate.trim().is_empty() =>
            {
                Ok((reference.trim().to_owned(), candidate.trim().to_owned()))
            }
            _ => anyhow::bail!(
                "Invalid comparison `{string}`. Expected `Reference{}Candidate`",
                Self::COMPARISON_SEPARATOR
            ),
        }
    }

    ///
    /// Checks that the configuration is consistent before any file is read.
    ///
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.algorithms.is_empty() {
            anyhow::bail!("No algorithms to analyze");
        }
        if !self.input_directory.is_dir() {
            anyhow::bail!(
                "Expected a directory with benchmark files, but got {:?}",
                self.input_directory
            );
        }
        for (reference, candidate) in self.comparisons.iter() {
            for algorithm in [reference, candidate] {
                if !self.algorithms.contains(algorithm) {
                    anyhow::bail!(
                        "Comparison `{reference}{}{candidate}` refers to `{algorithm}`, which is not among the analyzed algorithms",
                        Self::COMPARISON_SEPARATOR
                    );
                }
            }
        }
        if !self.comparisons.is_empty() && self.sizes.is_empty() {
            anyhow::bail!("No representative sizes to compare at");
        }
        if !self.chart_sets.is_empty() && self.chart_directory.is_none() {
            anyhow::bail!("Chart sets are selected, but no chart directory is provided");
        }
        Ok(())
    }
}
