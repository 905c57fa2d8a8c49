//!
//! The MST benchmark analyzer library.
//!

pub mod chart;
pub mod comparison;
pub mod configuration;
pub mod error;
pub mod input;
pub mod model;
pub mod output;
pub mod pipeline;
pub mod reduction;
pub mod util;
pub mod validation;

pub use crate::chart::field::Field as ChartField;
pub use crate::chart::series::Series as ChartSeries;
pub use crate::chart::set::ChartSet;
pub use crate::chart::split::NodeSplit;
pub use crate::chart::split::Side as SplitSide;
pub use crate::chart::Chart;
pub use crate::chart::Kind as ChartKind;
pub use crate::comparison::cell::Cell as ComparisonCell;
pub use crate::comparison::row_index_map::RowIndexMap;
pub use crate::comparison::ComparisonTable;
pub use crate::configuration::Configuration;
pub use crate::error::Error;
pub use crate::input::error::Error as InputError;
pub use crate::input::Input;
pub use crate::model::algorithm;
pub use crate::model::dataset::Dataset as AlgorithmDataset;
pub use crate::model::record::Record as BenchmarkRecord;
pub use crate::model::size::RepresentativeSize;
pub use crate::model::trial::Trial;
pub use crate::output::file::File as OutputFile;
pub use crate::output::format::Format as ReportFormat;
pub use crate::output::table::format::Format as TableFormat;
pub use crate::output::table::Table;
pub use crate::output::Output;
pub use crate::pipeline::Ingested;
pub use crate::pipeline::Reduced;
pub use crate::pipeline::Validated;

/// The number of decimals kept in reduced measurements and absolute deltas.
pub const DECIMALS: u32 = 3;

/// The number of decimals kept in percentage values.
pub const DECIMALS_PERCENTAGE: u32 = 2;

/// The benchmark file extension.
pub const EXTENSION_CSV: &str = "csv";

/// The JSON file extension.
pub const EXTENSION_JSON: &str = "json";

/// The LaTeX file extension.
pub const EXTENSION_TEX: &str = "tex";
