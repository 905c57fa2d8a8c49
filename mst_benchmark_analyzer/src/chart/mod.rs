//!
//! Chart data for an external renderer.
//!

#[cfg(test)]
mod tests;

pub mod field;
pub mod series;
pub mod set;
pub mod split;

use crate::comparison::row_index_map::RowIndexMap;
use crate::error::Error;
use crate::model::dataset::Dataset;
use crate::model::size::RepresentativeSize;

use self::field::Field;
use self::series::Series;
use self::split::NodeSplit;
use self::split::Side;

///
/// The chart kind.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    /// One line per series.
    Line,
    /// One bar per point.
    Bar,
}

///
/// Chart data: what to draw, not how.
///
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Chart {
    /// The chart title.
    pub title: String,
    /// The chart kind.
    pub kind: Kind,
    /// The horizontal axis field.
    pub x: Field,
    /// The vertical axis field.
    pub y: Field,
    /// Whether the vertical axis is logarithmic.
    pub log_y: bool,
    /// The series, one per algorithm.
    pub series: Vec<Series>,
}

impl Chart {
    /// The title separator between algorithm names.
    pub const TITLE_SEPARATOR: &'static str = " vs ";

    /// The title suffix of log-scaled charts.
    pub const TITLE_SUFFIX_LOG_Y: &'static str = " (log y scaled)";

    ///
    /// A line chart of `y` over `x` for every dataset.
    ///
    pub fn line(datasets: &[&Dataset], x: Field, y: Field, title: String) -> Self {
        Self {
            title,
            kind: Kind::Line,
            x,
            y,
            log_y: false,
            series: datasets
                .iter()
                .map(|dataset| Series::new(dataset, x, y))
                .collect(),
        }
    }

    ///
    /// A line chart of elapsed time over node count, titled after the datasets.
    ///
    pub fn versus(datasets: &[&Dataset], log_y: bool) -> Self {
        let mut title = Self::title(datasets);
        if log_y {
            title.push_str(Self::TITLE_SUFFIX_LOG_Y);
        }
        let mut chart = Self::line(datasets, Field::N, Field::Ms, title);
        chart.log_y = log_y;
        chart
    }

    ///
    /// Versus charts of the datasets split by node count.
    ///
    pub fn split(datasets: &[&Dataset], split: NodeSplit, side: Side) -> Vec<Self> {
        let (left, right): (Vec<Dataset>, Vec<Dataset>) = datasets
            .iter()
            .map(|dataset| dataset.partition(|record| split.is_left(record)))
            .unzip();

        let mut charts = Vec::with_capacity(2);
        for (has_side, side_datasets, label) in [
            (side.has_left(), left, split.left_label()),
            (side.has_right(), right, split.right_label()),
        ] {
            if !has_side {
                continue;
            }
            let side_datasets = side_datasets.iter().collect::<Vec<&Dataset>>();
            let mut chart = Self::versus(side_datasets.as_slice(), false);
            chart.title = format!("{} ({label})", chart.title);
            charts.push(chart);
        }
        charts
    }

    ///
    /// A bar chart of the elapsed time at the representative sizes.
    ///
    pub fn representative(dataset: &Dataset, sizes: &[RepresentativeSize]) -> Result<Self, Error> {
        let records = RowIndexMap::scan(dataset, sizes)?
            .indexes()
            .into_iter()
            .map(|index| dataset.records[index].clone())
            .collect();
        let subset = Dataset::new(dataset.algorithm.clone(), records);

        let mut chart = Self::line(&[&subset], Field::N, Field::Ms, dataset.algorithm.clone());
        chart.kind = Kind::Bar;
        chart.log_y = true;
        Ok(chart)
    }

    ///
    /// Joins the dataset names with the title separator.
    ///
    pub fn title(datasets: &[&Dataset]) -> String {
        datasets
            .iter()
            .map(|dataset| dataset.algorithm.as_str())
            .collect::<Vec<&str>>()
            .join(Self::TITLE_SEPARATOR)
    }

    ///
    /// Returns a file name stem unique within a chart set.
    ///
    pub fn file_stem(&self, index: usize) -> String {
        let slug = self
            .title
            .chars()
            .map(|character| {
                if character.is_ascii_alphanumeric() {
                    character
                } else {
                    '_'
                }
            })
            .collect::<String>();
        let slug = slug
            .split('_')
            .filter(|part| !part.is_empty())
            .collect::<Vec<&str>>()
            .join("_");
        format!("{index:02}_{slug}")
    }
}
