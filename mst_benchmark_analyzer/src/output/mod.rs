//!
//! Benchmark analyzer output.
//!


pub mod export;
pub mod file;
pub mod format;
pub mod json;
pub mod table;
pub mod xlsx;

use std::path::Path;

use crate::chart::Chart;
use crate::comparison::ComparisonTable;
use crate::model::dataset::Dataset;
use crate::output::format::Format;
use crate::output::json::Json;
use crate::output::xlsx::Xlsx;

use self::file::File;

///
/// Analysis output ready to be written.
///
pub enum Output {
    /// Output is a single unnamed text file.
    SingleFile(String),
    /// Output is a single unnamed spreadsheet.
    SingleFileXlsx(rust_xlsxwriter::Workbook),
    /// Output is structured as a file tree, relative to some
    /// user-provided output directory.
    MultipleFiles(Vec<File>),
}

impl Output {
    ///
    /// Builds the comparison report in `format`.
    ///
    pub fn report(tables: &[ComparisonTable], format: Format) -> anyhow::Result<Self> {
        Ok(match format {
            Format::Json => Json::try_from(tables)?.into(),
            Format::Xlsx => Xlsx::try_from(tables)?.into(),
        })
    }

    ///
    /// Builds the reduced dataset exports: a CSV file per dataset, and a LaTeX table
    /// per dataset if `with_latex` is set. Empty datasets are skipped.
    ///
    pub fn exports<'a, I>(datasets: I, with_latex: bool) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = &'a Dataset>,
    {
        let mut files = Vec::new();
        for dataset in datasets.into_iter().filter(|dataset| !dataset.is_empty()) {
            files.push(export::csv(dataset)?);
            if with_latex {
                files.push(export::latex(dataset));
            }
        }
        Ok(Self::MultipleFiles(files))
    }

    ///
    /// Builds one JSON file per chart.
    ///
    pub fn charts(charts: &[Chart]) -> anyhow::Result<Self> {
        let files = charts
            .iter()
            .enumerate()
            .map(|(index, chart)| File::json(chart.file_stem(index), chart))
            .collect::<anyhow::Result<Vec<File>>>()?;
        Ok(Self::MultipleFiles(files))
    }

    ///
    /// Writes the output to `path`: a file for single outputs, a directory otherwise.
    ///
    pub fn write_to_file(self, path: &Path) -> anyhow::Result<()> {
        match self {
            Output::SingleFile(content) => {
                std::fs::write(path, content)
                    .map_err(|error| anyhow::anyhow!("Output file {path:?} writing: {error}"))?;
            }
            Output::SingleFileXlsx(mut workbook) => {
                workbook
                    .save(path)
                    .map_err(|error| anyhow::anyhow!("Output file {path:?} writing: {error}"))?;
            }
            Output::MultipleFiles(files) => {
                if !files.is_empty() {
                    std::fs::create_dir_all(path).map_err(|error| {
                        anyhow::anyhow!("Output directory {path:?} creating: {error}")
                    })?;
                }
                for File {
                    path: relative_path,
                    content,
                } in files
                {
                    let file_path = path.join(relative_path);
                    std::fs::write(file_path.as_path(), content).map_err(|error| {
                        anyhow::anyhow!("Output file {file_path:?} writing: {error}")
                    })?;
                }
            }
        }
        Ok(())
    }
}

impl From<Json> for Output {
    fn from(value: Json) -> Self {
        Output::SingleFile(value.content)
    }
}

impl From<Xlsx> for Output {
    fn from(value: Xlsx) -> Self {
        Output::SingleFileXlsx(value.finalize())
    }
}
