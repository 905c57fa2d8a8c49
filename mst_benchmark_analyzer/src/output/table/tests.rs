//!
//! The table rendering tests.
//!

use crate::comparison::cell::Cell;
use crate::comparison::ComparisonTable;
use crate::model::size::RepresentativeSize;

use super::format::Format;
use super::Table;

fn comparison() -> ComparisonTable {
    ComparisonTable {
        reference: "KruskalSimple".to_owned(),
        candidate: "PrimKHeap".to_owned(),
        sizes: vec![
            RepresentativeSize::new("8k".to_owned(), 8000),
            RepresentativeSize::new("10k".to_owned(), 10000),
        ],
        reference_values: vec![5.0, 0.0],
        candidate_values: vec![4.0, 2.5],
        differences: vec![1.0, -2.5],
        improvements: vec![Cell::Value(20.0), Cell::DivisionByZero],
    }
}

#[test]
fn plain() {
    let table = Table::from(&comparison());

    let expected = r#"+---------------+----+------+
|               | 8k |  10k |
+---------------+----+------+
| KruskalSimple |  5 |    0 |
| PrimKHeap     |  4 |  2.5 |
| Difference    |  1 | -2.5 |
| Improvement % | 20 |  n/a |
+---------------+----+------+
"#;
    assert_eq!(table.render(Format::Plain), expected);
}

#[test]
fn latex() {
    let table = Table::from(&comparison());

    let expected = r#"\begin{tabular}{lrr}
\hline
 & 8k & 10k \\
\hline
KruskalSimple & 5 & 0 \\
PrimKHeap & 4 & 2.5 \\
Difference & 1 & -2.5 \\
Improvement \% & 20 & n/a \\
\hline
\end{tabular}
"#;
    assert_eq!(table.render(Format::Latex), expected);
}

#[test]
fn latex_float() {
    let table = Table::new(
        vec!["ms".to_owned(), "MST".to_owned(), "File".to_owned()],
        vec![vec!["1.5".to_owned(), "42".to_owned(), "input_10_20.txt".to_owned()]],
    );

    let rendered = table.render_latex_float("Results of PrimKHeap", "table:PrimKHeap-results");

    assert!(rendered.starts_with("\\begin{table}[htbp]\n\\centering\n\\begin{tabular}{lrr}\n"));
    assert!(rendered.contains("1.5 & 42 & input\\_10\\_20.txt \\\\\n"));
    assert!(rendered.contains("\\caption{Results of PrimKHeap}\n"));
    assert!(rendered.contains("\\label{table:PrimKHeap-results}\n"));
}

#[test]
fn format_from_str() {
    assert_eq!("LaTeX".parse::<Format>().expect("Always valid"), Format::Latex);
    assert!("html".parse::<Format>().is_err());
}
