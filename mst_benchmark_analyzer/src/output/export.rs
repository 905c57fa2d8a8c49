//!
//! Reduced dataset exports.
//!

use crate::model::dataset::Dataset;
use crate::output::file::File;
use crate::output::table::Table;

///
/// A reduced dataset row as exported: instance sizes dropped, columns renamed.
///
#[derive(Debug, serde::Serialize)]
struct Row<'a> {
    /// The elapsed time.
    ms: f64,
    /// The computed MST weight.
    #[serde(rename = "MST")]
    output: f64,
    /// The trial provenance.
    #[serde(rename = "File")]
    file: &'a str,
}

///
/// Serializes `dataset` to a `;`-delimited `<Algorithm>.min.csv` file.
///
pub fn csv(dataset: &Dataset) -> anyhow::Result<File> {
    let path = format!("{}.min.{}", dataset.algorithm, crate::EXTENSION_CSV);

    let mut writer = csv::WriterBuilder::new()
        .delimiter(crate::input::Input::DELIMITER)
        .from_writer(Vec::with_capacity(dataset.len() * 32));
    for record in dataset.records.iter() {
        writer
            .serialize(Row {
                ms: record.elapsed_ms,
                output: record.output,
                file: record.source_label.as_str(),
            })
            .map_err(|error| anyhow::anyhow!("Export file {path:?} serializing: {error}"))?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|error| anyhow::anyhow!("Export file {path:?} flushing: {error}"))?;
    let content = String::from_utf8(bytes)
        .map_err(|error| anyhow::anyhow!("Export file {path:?} encoding: {error}"))?;

    Ok(File::new(path, content))
}

///
/// Renders `dataset` to a captioned LaTeX table in a `<Algorithm>.min.tex` file.
///
pub fn latex(dataset: &Dataset) -> File {
    let path = format!("{}.min.{}", dataset.algorithm, crate::EXTENSION_TEX);
    let content = Table::from(dataset).render_latex_float(
        format!("Results of {}", dataset.algorithm).as_str(),
        format!("table:{}-results", dataset.algorithm).as_str(),
    );
    File::new(path, content)
}
