//!
//! The reduction tests.
//!

use std::path::PathBuf;

use crate::error::Error;
use crate::input::Input;
use crate::model::record::Record;
use crate::model::trial::Trial;

use super::reduce;

const INSTANCES: [(u64, u64); 3] = [(10, 20), (20, 45), (30, 60)];

fn trial(name: &str, times: &[f64]) -> Trial {
    Trial::new(
        PathBuf::from(name),
        times
            .iter()
            .zip(INSTANCES.iter())
            .map(|(ms, (n, m))| Record::new(*ms, (*n * 3) as f64, *n, *m, name.to_owned()))
            .collect(),
    )
}

fn elapsed(records: &[Record]) -> Vec<f64> {
    records.iter().map(|record| record.elapsed_ms).collect()
}

#[test]
fn minimum_per_row() {
    let input = Input::new(
        "KruskalSimple".to_owned(),
        vec![
            trial("KruskalSimple_1.csv", &[5.0, 3.1, 9.9]),
            trial("KruskalSimple_2.csv", &[5.2, 3.0, 10.1]),
        ],
    );

    let dataset = reduce(&input).expect("Always valid");

    assert_eq!(dataset.algorithm, "KruskalSimple");
    assert_eq!(elapsed(dataset.records.as_slice()), vec![5.0, 3.0, 9.9]);
    assert_eq!(dataset.records[0].source_label, "KruskalSimple_1.csv");
    assert_eq!(dataset.records[1].source_label, "KruskalSimple_2.csv");
    assert_eq!(dataset.records[2].source_label, "KruskalSimple_1.csv");
}

#[test]
fn winning_record_fields_are_kept() {
    let mut slow = trial("PrimKHeap_1.csv", &[2.0, 2.0, 2.0]);
    let mut fast = trial("PrimKHeap_2.csv", &[1.0, 3.0, 3.0]);
    slow.records[0].output = 111.0;
    fast.records[0].output = 222.0;
    let input = Input::new("PrimKHeap".to_owned(), vec![slow, fast]);

    let dataset = reduce(&input).expect("Always valid");

    assert_eq!(dataset.records[0].output, 222.0);
    assert_eq!(dataset.records[0].instance(), (10, 20));
    assert_eq!(dataset.records[0].source_label, "PrimKHeap_2.csv");
}

#[test]
fn single_file_is_kept_rounded() {
    let single = trial("PrimBinaryHeap_1.csv", &[1.23456, 2.0, 3.0004]);
    let input = Input::new("PrimBinaryHeap".to_owned(), vec![single.clone()]);

    let dataset = reduce(&input).expect("Always valid");

    let expected = single
        .records
        .iter()
        .map(|record| record.rounded(crate::DECIMALS))
        .collect::<Vec<Record>>();
    assert_eq!(dataset.records, expected);
    assert_eq!(elapsed(dataset.records.as_slice()), vec![1.235, 2.0, 3.0]);
}

#[test]
fn tie_keeps_first_file() {
    let input = Input::new(
        "KruskalUnionFind".to_owned(),
        vec![
            trial("KruskalUnionFind_1.csv", &[1.0, 2.0, 3.0]),
            trial("KruskalUnionFind_2.csv", &[1.0, 2.0, 3.0]),
        ],
    );

    let dataset = reduce(&input).expect("Always valid");

    assert!(dataset
        .records
        .iter()
        .all(|record| record.source_label == "KruskalUnionFind_1.csv"));
}

#[test]
fn no_files() {
    let input = Input::new("KruskalSimple".to_owned(), vec![]);

    let dataset = reduce(&input).expect("Always valid");

    assert!(dataset.is_empty());
}

#[test]
fn error_short_file() {
    let input = Input::new(
        "KruskalSimple".to_owned(),
        vec![
            trial("KruskalSimple_1.csv", &[1.0, 2.0, 3.0]),
            trial("KruskalSimple_2.csv", &[1.0, 2.0]),
        ],
    );

    assert!(matches!(reduce(&input), Err(Error::SchemaMismatch { .. })));
}
