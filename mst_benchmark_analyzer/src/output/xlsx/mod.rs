//!
//! XLSX comparison report.
//!

pub mod worksheet;

use crate::comparison::ComparisonTable;

use self::worksheet::Worksheet;

///
/// XLSX comparison report with one worksheet per comparison.
///
#[derive(Default)]
pub struct Xlsx {
    /// The worksheets in comparison order.
    pub worksheets: Vec<Worksheet>,
}

impl Xlsx {
    /// The worksheet name prefix. Worksheet names are limited to 31 characters,
    /// so the algorithm names go into the caption instead.
    const WORKSHEET_NAME_PREFIX: &'static str = "Comparison";

    ///
    /// Returns the final workbook with all worksheets.
    ///
    pub fn finalize(self) -> rust_xlsxwriter::Workbook {
        let mut workbook = rust_xlsxwriter::Workbook::new();
        for worksheet in self.worksheets.into_iter() {
            workbook.push_worksheet(worksheet.into_inner());
        }
        workbook
    }
}

impl TryFrom<&[ComparisonTable]> for Xlsx {
    type Error = anyhow::Error;

    fn try_from(tables: &[ComparisonTable]) -> Result<Self, Self::Error> {
        let mut xlsx = Self::default();

        for (index, table) in tables.iter().enumerate() {
            let name = format!("{} {}", Self::WORKSHEET_NAME_PREFIX, index + 1);
            let caption = format!("{} vs {}", table.reference, table.candidate);
            let mut worksheet =
                Worksheet::new(name.as_str(), caption.as_str(), table.header().as_slice())?;

            for (label, cells) in table.rows().into_iter() {
                let is_percentage = label == ComparisonTable::LABEL_IMPROVEMENT;
                worksheet.write_row(label.as_str(), cells.as_slice(), is_percentage)?;
            }
            xlsx.worksheets.push(worksheet);
        }

        Ok(xlsx)
    }
}
