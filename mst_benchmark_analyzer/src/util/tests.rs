//!
//! The utility function tests.
//!

use crate::chart::field::Field;
use crate::output::format::Format;

use super::parse_variant;
use super::round;

#[test]
fn rounds_to_three_decimals() {
    assert_eq!(round(2.9000000000000004, 3), 2.9);
    assert_eq!(round(1.23456, 3), 1.235);
    assert_eq!(round(10.0, 3), 10.0);
}

#[test]
fn rounds_to_two_decimals() {
    assert_eq!(round(100.0 / 3.0, 2), 33.33);
    assert_eq!(round(29.292929, 2), 29.29);
}

#[test]
fn is_odd_symmetric() {
    for value in [0.0005, 1.2345, 2.9000000000000004, 7.77777] {
        assert_eq!(round(-value, 3), -round(value, 3));
    }
}

#[test]
fn parses_variants_ignoring_case() {
    assert_eq!(parse_variant("field", "MS", &Field::ALL).expect("Always valid"), Field::Ms);
    assert_eq!(
        parse_variant("report format", "xlsx", &Format::ALL).expect("Always valid"),
        Format::Xlsx
    );
}

#[test]
fn unknown_variant_lists_supported() {
    let error = parse_variant("report format", "pdf", &Format::ALL).expect_err("Always invalid");
    assert_eq!(
        error.to_string(),
        "Unknown report format `pdf`. Supported values: json, xlsx"
    );
}
