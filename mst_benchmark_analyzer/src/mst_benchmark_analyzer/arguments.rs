//!
//! The MST benchmark analyzer arguments.
//!

use std::path::PathBuf;

use clap::Parser;

///
/// The MST benchmark analyzer arguments.
///
#[derive(Debug, Parser)]
#[command(about, long_about = None, arg_required_else_help = true)]
pub struct Arguments {
    /// Suppresses progress and warnings.
    #[arg(short, long)]
    pub quiet: bool,

    /// The directory with `<Algorithm>*.csv` benchmark files.
    pub input_directory: PathBuf,

    /// Algorithms to analyze, comma-separated.
    /// Defaults to the five reference algorithms.
    #[arg(short, long, value_delimiter = ',')]
    pub algorithms: Vec<String>,

    /// Comparisons written as `Reference:Candidate`, comma-separated.
    /// Defaults to the nine reference comparisons.
    #[arg(short, long, value_delimiter = ',')]
    pub comparisons: Vec<String>,

    /// Representative sizes, comma-separated, e.g. `8k,10k,20k`.
    /// Defaults to `8k,10k,20k,40k,80k,100k`.
    #[arg(short, long, value_delimiter = ',')]
    pub sizes: Vec<mst_benchmark_analyzer::RepresentativeSize>,

    /// Terminal table format: `plain` (default) or `latex`.
    #[arg(long, default_value_t = mst_benchmark_analyzer::TableFormat::Plain)]
    pub table_format: mst_benchmark_analyzer::TableFormat,

    /// Comparison report file.
    #[arg(long)]
    pub report_path: Option<PathBuf>,

    /// Comparison report format: `json` (default) or `xlsx`.
    #[arg(long, default_value_t = mst_benchmark_analyzer::ReportFormat::Json)]
    pub report_format: mst_benchmark_analyzer::ReportFormat,

    /// Directory to export reduced datasets to.
    #[arg(long)]
    pub export_directory: Option<PathBuf>,

    /// Exports LaTeX tables along with CSV files.
    #[arg(long)]
    pub export_latex: bool,

    /// Chart sets to build: `main`, `table`, `other`, `representative`, comma-separated.
    #[arg(long, value_delimiter = ',')]
    pub chart_sets: Vec<mst_benchmark_analyzer::ChartSet>,

    /// Directory to write chart data to.
    #[arg(long)]
    pub chart_directory: Option<PathBuf>,

    /// Parses trial files in parallel.
    #[arg(short, long)]
    pub parallel: bool,
}

impl TryFrom<Arguments> for mst_benchmark_analyzer::Configuration {
    type Error = anyhow::Error;

    fn try_from(arguments: Arguments) -> Result<Self, Self::Error> {
        let mut configuration = Self::new(arguments.input_directory);
        if !arguments.algorithms.is_empty() {
            configuration.algorithms = arguments.algorithms;
        }
        if !arguments.comparisons.is_empty() {
            configuration.comparisons = arguments
                .comparisons
                .iter()
                .map(|comparison| Self::parse_comparison(comparison.as_str()))
                .collect::<anyhow::Result<Vec<(String, String)>>>()?;
        }
        if !arguments.sizes.is_empty() {
            configuration.sizes = arguments.sizes;
        }
        configuration.table_format = arguments.table_format;
        configuration.chart_sets = arguments.chart_sets;
        configuration.chart_directory = arguments.chart_directory;
        configuration.report_path = arguments.report_path;
        configuration.report_format = arguments.report_format;
        configuration.export_directory = arguments.export_directory;
        configuration.export_latex = arguments.export_latex;
        configuration.parallel = arguments.parallel;
        configuration.quiet = arguments.quiet;
        configuration.validate()?;
        Ok(configuration)
    }
}
