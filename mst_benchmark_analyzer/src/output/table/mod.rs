//!
//! Printable tables.
//!

#[cfg(test)]
mod tests;

pub mod format;

use std::fmt::Write;

use crate::comparison::ComparisonTable;
use crate::model::dataset::Dataset;

use self::format::Format;

///
/// A printable table of string cells.
///
/// The first column holds row labels and is left-aligned, the rest are right-aligned.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    /// The header cells.
    pub header: Vec<String>,
    /// The data rows.
    pub rows: Vec<Vec<String>>,
}

impl Table {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(header: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { header, rows }
    }

    ///
    /// Renders the table in `format`.
    ///
    pub fn render(&self, format: Format) -> String {
        match format {
            Format::Plain => self.render_plain(),
            Format::Latex => self.render_latex(),
        }
    }

    ///
    /// Renders the table as a bordered grid.
    ///
    pub fn render_plain(&self) -> String {
        let widths = self.widths();
        let border = widths
            .iter()
            .map(|width| "-".repeat(width + 2))
            .collect::<Vec<String>>()
            .join("+");
        let border = format!("+{border}+\n");

        let mut content = String::with_capacity(border.len() * (self.rows.len() + 4));
        content.push_str(border.as_str());
        content.push_str(Self::plain_line(self.header.as_slice(), widths.as_slice()).as_str());
        content.push_str(border.as_str());
        for row in self.rows.iter() {
            content.push_str(Self::plain_line(row.as_slice(), widths.as_slice()).as_str());
        }
        content.push_str(border.as_str());
        content
    }

    ///
    /// Renders the table as a LaTeX `tabular` environment.
    ///
    pub fn render_latex(&self) -> String {
        let columns = self.columns();
        let alignment = std::iter::once("l")
            .chain(std::iter::repeat("r").take(columns.saturating_sub(1)))
            .collect::<String>();

        let mut content = String::new();
        writeln!(content, "\\begin{{tabular}}{{{alignment}}}").expect("Always valid");
        content.push_str("\\hline\n");
        content.push_str(Self::latex_line(self.header.as_slice()).as_str());
        content.push_str("\\hline\n");
        for row in self.rows.iter() {
            content.push_str(Self::latex_line(row.as_slice()).as_str());
        }
        content.push_str("\\hline\n");
        content.push_str("\\end{tabular}\n");
        content
    }

    ///
    /// Renders the table as a captioned, labelled LaTeX float.
    ///
    pub fn render_latex_float(&self, caption: &str, label: &str) -> String {
        let mut content = String::new();
        content.push_str("\\begin{table}[htbp]\n");
        content.push_str("\\centering\n");
        content.push_str(self.render_latex().as_str());
        writeln!(content, "\\caption{{{}}}", Self::latex_escape(caption)).expect("Always valid");
        writeln!(content, "\\label{{{label}}}").expect("Always valid");
        content.push_str("\\end{table}\n");
        content
    }

    ///
    /// Returns the number of columns.
    ///
    fn columns(&self) -> usize {
        self.rows
            .iter()
            .map(Vec::len)
            .chain(std::iter::once(self.header.len()))
            .max()
            .unwrap_or_default()
    }

    ///
    /// Returns the width of every column.
    ///
    fn widths(&self) -> Vec<usize> {
        let mut widths = vec![0; self.columns()];
        for row in std::iter::once(&self.header).chain(self.rows.iter()) {
            for (index, cell) in row.iter().enumerate() {
                widths[index] = widths[index].max(cell.chars().count());
            }
        }
        widths
    }

    ///
    /// Formats a plain text line, padding missing cells.
    ///
    fn plain_line(cells: &[String], widths: &[usize]) -> String {
        let mut line = String::from("|");
        for (index, &width) in widths.iter().enumerate() {
            let cell = cells.get(index).map(String::as_str).unwrap_or_default();
            if index == 0 {
                write!(line, " {cell:<width$} |").expect("Always valid");
            } else {
                write!(line, " {cell:>width$} |").expect("Always valid");
            }
        }
        line.push('\n');
        line
    }

    ///
    /// Formats a LaTeX table line.
    ///
    fn latex_line(cells: &[String]) -> String {
        let cells = cells
            .iter()
            .map(|cell| Self::latex_escape(cell.as_str()))
            .collect::<Vec<String>>()
            .join(" & ");
        format!("{cells} \\\\\n")
    }

    ///
    /// Escapes the LaTeX special characters found in benchmark labels.
    ///
    fn latex_escape(text: &str) -> String {
        let mut escaped = String::with_capacity(text.len());
        for character in text.chars() {
            match character {
                '%' | '_' | '&' | '#' | '$' | '{' | '}' => {
                    escaped.push('\\');
                    escaped.push(character);
                }
                character => escaped.push(character),
            }
        }
        escaped
    }
}

impl From<&ComparisonTable> for Table {
    fn from(table: &ComparisonTable) -> Self {
        let rows = table
            .rows()
            .into_iter()
            .map(|(label, cells)| {
                std::iter::once(label)
                    .chain(cells.iter().map(|cell| cell.to_string()))
                    .collect()
            })
            .collect();
        Self::new(table.header(), rows)
    }
}

impl From<&Dataset> for Table {
    fn from(dataset: &Dataset) -> Self {
        let header = vec!["ms".to_owned(), "MST".to_owned(), "File".to_owned()];
        let rows = dataset
            .records
            .iter()
            .map(|record| {
                vec![
                    record.elapsed_ms.to_string(),
                    record.output.to_string(),
                    record.source_label.clone(),
                ]
            })
            .collect();
        Self::new(header, rows)
    }
}
