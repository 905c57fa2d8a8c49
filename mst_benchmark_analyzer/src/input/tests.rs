//!
//! The benchmark input tests.
//!

use std::path::Path;

use super::error::Error as InputError;
use super::Input;

const HEADER: &str = "ms;output;n;m;filename";

fn write(directory: &Path, name: &str, content: &str) {
    std::fs::write(directory.join(name), content).expect("Always valid");
}

#[test]
fn parse() {
    let text = format!("{HEADER}\n1.5;42;10;20;graph_10_20.txt\n0.25;99.5;20;45;graph_20_45.txt\n");

    let records = Input::parse(text.as_bytes()).expect("Always valid");

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].elapsed_ms, 1.5);
    assert_eq!(records[0].output, 42.0);
    assert_eq!(records[0].instance(), (10, 20));
    assert_eq!(records[0].source_label, "graph_10_20.txt");
    assert_eq!(records[1].output, 99.5);
    assert_eq!(records[1].instance(), (20, 45));
}

#[test]
fn parse_header_only() {
    let records = Input::parse(format!("{HEADER}\n").as_bytes()).expect("Always valid");
    assert!(records.is_empty());
}

#[test]
fn error_parse_invalid_number() {
    let text = format!("{HEADER}\nfast;42;10;20;graph.txt\n");
    assert!(Input::parse(text.as_bytes()).is_err());
}

#[test]
fn error_parse_missing_column() {
    let text = "ms;output;n;filename\n1.0;42;10;graph.txt\n";
    assert!(Input::parse(text.as_bytes()).is_err());
}

#[test]
fn discover_matches_algorithm_only() {
    let directory = tempfile::tempdir().expect("Always valid");
    let row = format!("{HEADER}\n1.0;7;10;20;graph.txt\n");
    write(directory.path(), "KruskalUnionFind_2.csv", row.as_str());
    write(directory.path(), "KruskalUnionFind_1.csv", row.as_str());
    write(directory.path(), "KruskalUnionFindCompressed_1.csv", row.as_str());
    write(directory.path(), "KruskalUnionFind_notes.txt", row.as_str());

    let input =
        Input::discover(directory.path(), "KruskalUnionFind", false).expect("Always valid");

    let names = input
        .trials
        .iter()
        .map(|trial| {
            trial
                .path
                .file_name()
                .expect("Always valid")
                .to_string_lossy()
                .to_string()
        })
        .collect::<Vec<String>>();
    assert_eq!(names, vec!["KruskalUnionFind_1.csv", "KruskalUnionFind_2.csv"]);
    assert_eq!(input.algorithm, "KruskalUnionFind");
}

#[test]
fn discover_parallel_keeps_path_order() {
    let directory = tempfile::tempdir().expect("Always valid");
    for index in (0..16).rev() {
        write(
            directory.path(),
            format!("PrimKHeap_{index:02}.csv").as_str(),
            format!("{HEADER}\n{index}.0;7;10;20;graph.txt\n").as_str(),
        );
    }

    let sequential = Input::discover(directory.path(), "PrimKHeap", false).expect("Always valid");
    let parallel = Input::discover(directory.path(), "PrimKHeap", true).expect("Always valid");

    assert_eq!(sequential, parallel);
    assert_eq!(parallel.trials[0].records[0].elapsed_ms, 0.0);
    assert_eq!(parallel.trials[15].records[0].elapsed_ms, 15.0);
}

#[test]
fn discover_no_files() {
    let directory = tempfile::tempdir().expect("Always valid");

    let input = Input::discover(directory.path(), "PrimBinaryHeap", false).expect("Always valid");

    assert!(input.trials.is_empty());
}

#[test]
fn error_discover_empty_file() {
    let directory = tempfile::tempdir().expect("Always valid");
    write(
        directory.path(),
        "PrimBinaryHeap_1.csv",
        format!("{HEADER}\n1.0;7;10;20;graph.txt\n").as_str(),
    );
    write(directory.path(), "PrimBinaryHeap_2.csv", " \n");
    let empty = directory.path().join("PrimBinaryHeap_2.csv");

    for parallel in [false, true] {
        let result = Input::discover(directory.path(), "PrimBinaryHeap", parallel);
        assert!(matches!(result, Err(InputError::EmptyFile { path }) if path == empty));
    }
}

#[test]
fn error_read_invalid_elapsed_time() {
    let directory = tempfile::tempdir().expect("Always valid");
    for (index, value) in ["NaN", "inf", "-3.0"].iter().enumerate() {
        let name = format!("KruskalSimple_{index}.csv");
        write(
            directory.path(),
            name.as_str(),
            format!("{HEADER}\n1.0;7;10;20;graph.txt\n{value};7;20;45;graph.txt\n").as_str(),
        );

        let result = Input::read(directory.path().join(name).as_path());

        assert!(
            matches!(result, Err(InputError::InvalidElapsedTime { row: 1, .. })),
            "`{value}` must be rejected"
        );
    }
}

#[test]
fn read_zero_elapsed_time() {
    let directory = tempfile::tempdir().expect("Always valid");
    write(
        directory.path(),
        "KruskalSimple_1.csv",
        format!("{HEADER}\n0.0;7;10;20;graph.txt\n").as_str(),
    );

    let trial = Input::read(directory.path().join("KruskalSimple_1.csv").as_path())
        .expect("Always valid");

    assert_eq!(trial.records[0].elapsed_ms, 0.0);
}

#[test]
fn error_discover_invalid_file() {
    let directory = tempfile::tempdir().expect("Always valid");
    write(directory.path(), "KruskalSimple_1.csv", "ms;output\nslow;7\n");

    let result = Input::discover(directory.path(), "KruskalSimple", false);

    assert!(matches!(result, Err(InputError::Parsing { .. })));
}
