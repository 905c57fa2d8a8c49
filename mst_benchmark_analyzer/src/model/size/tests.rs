//!
//! The representative size tests.
//!

use std::str::FromStr;

use super::RepresentativeSize;

#[test]
fn thousands() {
    let size = RepresentativeSize::from_str("8k").expect("Always valid");
    assert_eq!(size.nodes, 8000);
    assert_eq!(size.label, "8k");
    assert_eq!(size.to_string(), "8k");
}

#[test]
fn plain_node_count() {
    let size = RepresentativeSize::from_str("250").expect("Always valid");
    assert_eq!(size.nodes, 250);
}

#[test]
fn reference_sizes() {
    let nodes = RepresentativeSize::reference()
        .into_iter()
        .map(|size| size.nodes)
        .collect::<Vec<u64>>();
    assert_eq!(nodes, vec![8000, 10000, 20000, 40000, 80000, 100000]);
}

#[test]
fn error_not_a_number() {
    assert!(RepresentativeSize::from_str("eightk").is_err());
    assert!(RepresentativeSize::from_str("k").is_err());
    assert!(RepresentativeSize::from_str("-8k").is_err());
}
