//!
//! The predefined chart sets.
//!

use crate::chart::split::NodeSplit;
use crate::chart::split::Side;
use crate::chart::Chart;
use crate::error::Error;
use crate::model::algorithm::KRUSKAL_SIMPLE;
use crate::model::algorithm::KRUSKAL_UNION_FIND;
use crate::model::algorithm::KRUSKAL_UNION_FIND_COMPRESSED;
use crate::model::algorithm::PRIM_BINARY_HEAP;
use crate::model::algorithm::PRIM_K_HEAP;
use crate::model::size::RepresentativeSize;
use crate::pipeline::Reduced;

///
/// The predefined chart sets over the reference algorithms.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartSet {
    /// Scaling of all algorithms and their main subsets.
    Main,
    /// One chart per reported comparison table.
    Table,
    /// Small versus large instances.
    Other,
    /// Elapsed time at the representative sizes, one bar chart per algorithm.
    Representative,
}

impl ChartSet {
    /// All chart sets in listing order.
    pub const ALL: [Self; 4] = [Self::Main, Self::Table, Self::Other, Self::Representative];

    /// The main set: algorithm groups and whether the chart is log-scaled.
    const MAIN: [(&'static [&'static str], bool); 8] = [
        (&crate::model::algorithm::ALL, false),
        (&crate::model::algorithm::ALL, true),
        (
            &[
                KRUSKAL_UNION_FIND,
                KRUSKAL_UNION_FIND_COMPRESSED,
                PRIM_BINARY_HEAP,
                PRIM_K_HEAP,
            ],
            false,
        ),
        (&[KRUSKAL_SIMPLE, KRUSKAL_UNION_FIND, PRIM_BINARY_HEAP], false),
        (&[KRUSKAL_SIMPLE, KRUSKAL_UNION_FIND, PRIM_BINARY_HEAP], true),
        (&[KRUSKAL_UNION_FIND, PRIM_BINARY_HEAP], false),
        (&[KRUSKAL_UNION_FIND, KRUSKAL_UNION_FIND_COMPRESSED], false),
        (&[PRIM_BINARY_HEAP, PRIM_K_HEAP], false),
    ];

    /// The table set: algorithm pairs and whether the chart is log-scaled.
    const TABLE: [(&'static [&'static str], bool); 9] = [
        (&[KRUSKAL_SIMPLE, KRUSKAL_UNION_FIND], true),
        (&[KRUSKAL_SIMPLE, KRUSKAL_UNION_FIND_COMPRESSED], true),
        (&[KRUSKAL_SIMPLE, PRIM_BINARY_HEAP], true),
        (&[KRUSKAL_UNION_FIND, KRUSKAL_UNION_FIND_COMPRESSED], false),
        (&[PRIM_BINARY_HEAP, KRUSKAL_UNION_FIND], false),
        (&[PRIM_BINARY_HEAP, KRUSKAL_UNION_FIND_COMPRESSED], false),
        (&[PRIM_BINARY_HEAP, PRIM_K_HEAP], false),
        (&[PRIM_K_HEAP, KRUSKAL_UNION_FIND], false),
        (&[PRIM_K_HEAP, KRUSKAL_UNION_FIND_COMPRESSED], false),
    ];

    ///
    /// Builds the charts of the set from the reduced datasets.
    ///
    pub fn charts(
        &self,
        reduced: &Reduced,
        sizes: &[RepresentativeSize],
    ) -> Result<Vec<Chart>, Error> {
        match self {
            Self::Main => Self::versus_charts(reduced, &Self::MAIN),
            Self::Table => Self::versus_charts(reduced, &Self::TABLE),
            Self::Other => {
                let mut charts = Vec::with_capacity(5);
                charts.extend(Chart::split(
                    reduced
                        .select(&[KRUSKAL_SIMPLE, KRUSKAL_UNION_FIND, PRIM_BINARY_HEAP])?
                        .as_slice(),
                    NodeSplit::at_most(2000),
                    Side::Left,
                ));
                let pair = reduced.select(&[KRUSKAL_UNION_FIND, PRIM_BINARY_HEAP])?;
                charts.extend(Chart::split(pair.as_slice(), NodeSplit::at_most(2000), Side::Both));
                charts.extend(Chart::split(pair.as_slice(), NodeSplit::below(20000), Side::Both));
                Ok(charts)
            }
            Self::Representative => reduced
                .select(&crate::model::algorithm::ALL)?
                .into_iter()
                .map(|dataset| Chart::representative(dataset, sizes))
                .collect(),
        }
    }

    ///
    /// Builds one versus chart per algorithm group.
    ///
    fn versus_charts(
        reduced: &Reduced,
        groups: &[(&'static [&'static str], bool)],
    ) -> Result<Vec<Chart>, Error> {
        groups
            .iter()
            .map(|&(algorithms, log_y)| -> Result<Chart, Error> {
                let datasets = reduced.select(algorithms)?;
                Ok(Chart::versus(datasets.as_slice(), log_y))
            })
            .collect()
    }
}

impl std::str::FromStr for ChartSet {
    type Err = anyhow::Error;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        crate::util::parse_variant("chart set", string, &Self::ALL)
    }
}

impl std::fmt::Display for ChartSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Main => write!(f, "main"),
            Self::Table => write!(f, "table"),
            Self::Other => write!(f, "other"),
            Self::Representative => write!(f, "representative"),
        }
    }
}
