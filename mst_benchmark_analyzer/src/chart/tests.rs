//!
//! The chart data tests.
//!

use std::str::FromStr;

use crate::error::Error;
use crate::input::Input;
use crate::model::algorithm;
use crate::model::dataset::Dataset;
use crate::model::record::Record;
use crate::model::size::RepresentativeSize;
use crate::model::trial::Trial;
use crate::pipeline::Ingested;

use super::field::Field;
use super::set::ChartSet;
use super::split::NodeSplit;
use super::split::Side;
use super::Chart;
use super::Kind;

fn dataset(algorithm: &str, rows: &[(f64, u64, u64)]) -> Dataset {
    Dataset::new(
        algorithm.to_owned(),
        rows.iter()
            .map(|(ms, n, m)| Record::new(*ms, 1.0, *n, *m, String::new()))
            .collect(),
    )
}

#[test]
fn versus_title() {
    let first = dataset("KruskalSimple", &[(1.0, 10, 20)]);
    let second = dataset("PrimKHeap", &[(2.0, 10, 20)]);

    let chart = Chart::versus(&[&first, &second], false);
    let chart_log_y = Chart::versus(&[&first, &second], true);

    assert_eq!(chart.title, "KruskalSimple vs PrimKHeap");
    assert_eq!(chart_log_y.title, "KruskalSimple vs PrimKHeap (log y scaled)");
    assert!(chart_log_y.log_y);
    assert_eq!(chart.series[1].points, vec![(10.0, 2.0)]);
    assert_eq!((chart.x, chart.y), (Field::N, Field::Ms));
}

#[test]
fn split_sides() {
    let data = dataset(
        "PrimBinaryHeap",
        &[(1.0, 1000, 2000), (2.0, 2000, 4000), (3.0, 3000, 6000)],
    );

    let both = Chart::split(&[&data], NodeSplit::at_most(2000), Side::Both);
    let left = Chart::split(&[&data], NodeSplit::below(2000), Side::Left);

    assert_eq!(both.len(), 2);
    assert_eq!(both[0].title, "PrimBinaryHeap (n <= 2000)");
    assert_eq!(both[0].series[0].points.len(), 2);
    assert_eq!(both[1].title, "PrimBinaryHeap (n > 2000)");
    assert_eq!(both[1].series[0].points, vec![(3000.0, 3.0)]);
    assert_eq!(left.len(), 1);
    assert_eq!(left[0].series[0].points, vec![(1000.0, 1.0)]);
}

#[test]
fn representative_bars() {
    let data = dataset(
        "KruskalSimple",
        &[(1.0, 8000, 100), (2.0, 8000, 300), (3.0, 10000, 50)],
    );
    let sizes = ["8k", "10k"]
        .iter()
        .map(|label| RepresentativeSize::from_str(label).expect("Always valid"))
        .collect::<Vec<RepresentativeSize>>();

    let chart = Chart::representative(&data, sizes.as_slice()).expect("Always valid");

    assert_eq!(chart.kind, Kind::Bar);
    assert_eq!(chart.series[0].points, vec![(8000.0, 2.0), (10000.0, 3.0)]);
}

#[test]
fn file_stem() {
    let data = dataset("KruskalSimple", &[(1.0, 10, 20)]);
    let chart = Chart::versus(&[&data, &data], true);

    assert_eq!(chart.file_stem(3), "03_KruskalSimple_vs_KruskalSimple_log_y_scaled");
}

#[test]
fn chart_sets() {
    let inputs = algorithm::ALL
        .iter()
        .map(|algorithm| {
            Input::new(
                (*algorithm).to_owned(),
                vec![Trial::new(
                    format!("{algorithm}_1.csv").into(),
                    vec![
                        Record::new(1.0, 5.0, 1000, 2000, String::new()),
                        Record::new(2.0, 6.0, 30000, 60000, String::new()),
                    ],
                )],
            )
        })
        .collect();
    let reduced = Ingested::new(inputs)
        .validate()
        .expect("Always valid")
        .reduce()
        .expect("Always valid");

    let sizes = vec![RepresentativeSize::from_str("1000").expect("Always valid")];

    let main = ChartSet::Main.charts(&reduced, sizes.as_slice()).expect("Always valid");
    let table = ChartSet::Table.charts(&reduced, sizes.as_slice()).expect("Always valid");
    let other = ChartSet::Other.charts(&reduced, sizes.as_slice()).expect("Always valid");
    let representative = ChartSet::Representative
        .charts(&reduced, sizes.as_slice())
        .expect("Always valid");

    assert_eq!(main.len(), 8);
    assert_eq!(main[0].series.len(), 5);
    assert_eq!(table.len(), 9);
    assert_eq!(other.len(), 5);
    assert_eq!(representative.len(), 5);
    assert_eq!(representative[0].title, "KruskalSimple");
    assert_eq!(representative[0].kind, Kind::Bar);
    assert_eq!(representative[0].series[0].points, vec![(1000.0, 1.0)]);

    let missing = vec![RepresentativeSize::from_str("8k").expect("Always valid")];
    assert!(matches!(
        ChartSet::Representative.charts(&reduced, missing.as_slice()),
        Err(Error::MissingInstance { nodes: 8000, .. })
    ));
}

#[test]
fn chart_set_parsing() {
    assert_eq!(ChartSet::from_str("Table").expect("Always valid"), ChartSet::Table);
    assert_eq!(
        ChartSet::from_str("representative").expect("Always valid"),
        ChartSet::Representative
    );
    let error = ChartSet::from_str("pie").expect_err("Always invalid");
    assert_eq!(
        error.to_string(),
        "Unknown chart set `pie`. Supported values: main, table, other, representative"
    );
}
