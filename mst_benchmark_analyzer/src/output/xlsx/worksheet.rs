//!
//! XLSX worksheet for a comparison table.
//!

use crate::comparison::cell::Cell;

///
/// XLSX worksheet for a comparison table.
///
/// The first row holds the caption, the second one the size header, the rest the data rows.
///
pub struct Worksheet {
    /// The inner worksheet.
    pub worksheet: rust_xlsxwriter::Worksheet,
    /// The index of the next row to write.
    pub next_row: u32,
}

impl Worksheet {
    /// Width of the row label column.
    const LABEL_COLUMN_WIDTH: usize = 30;
    /// Width of columns that contain values.
    const VALUE_COLUMN_WIDTH: usize = 12;

    ///
    /// Creates a new worksheet with the given name, caption, and header.
    ///
    pub fn new(name: &str, caption: &str, header: &[String]) -> anyhow::Result<Self> {
        let mut worksheet = rust_xlsxwriter::Worksheet::new();
        worksheet.set_name(name)?;

        worksheet.write_with_format(0, 0, caption, &Self::worksheet_caption_format())?;
        worksheet.set_column_width(0, Self::LABEL_COLUMN_WIDTH as f64)?;
        for (column_index, name) in header.iter().enumerate() {
            let column_index = column_index as u16;
            if column_index > 0 {
                worksheet.set_column_width(column_index, Self::VALUE_COLUMN_WIDTH as f64)?;
            }
            worksheet.write_with_format(
                1,
                column_index,
                name.as_str(),
                &Self::column_header_format(),
            )?;
        }

        Ok(Self {
            worksheet,
            next_row: 2,
        })
    }

    ///
    /// Writes a labelled data row.
    ///
    /// Percentage rows hold values like `33.33` and are written as fractions
    /// so the spreadsheet shows `33.33%`.
    ///
    pub fn write_row(
        &mut self,
        label: &str,
        cells: &[Cell],
        is_percentage: bool,
    ) -> anyhow::Result<()> {
        let row_index = self.next_row;
        self.worksheet
            .write_with_format(row_index, 0, label, &Self::row_header_format())?;

        for (index, cell) in cells.iter().enumerate() {
            let column_index = (index + 1) as u16;
            match cell {
                Cell::Value(value) if is_percentage => {
                    self.worksheet.write_with_format(
                        row_index,
                        column_index,
                        value / 100.0,
                        &Self::percent_format(),
                    )?;
                }
                Cell::Value(value) => {
                    self.worksheet.write_with_format(
                        row_index,
                        column_index,
                        *value,
                        &Self::value_format(),
                    )?;
                }
                Cell::DivisionByZero => {
                    self.worksheet.write_with_format(
                        row_index,
                        column_index,
                        Cell::DIVISION_BY_ZERO,
                        &Self::value_format(),
                    )?;
                }
            }
        }

        self.next_row += 1;
        Ok(())
    }

    ///
    /// Finalizes the worksheet and returns its inner object.
    ///
    pub fn into_inner(self) -> rust_xlsxwriter::Worksheet {
        self.worksheet
    }

    ///
    /// Returns the eponymous cell format.
    ///
    fn worksheet_caption_format() -> rust_xlsxwriter::Format {
        rust_xlsxwriter::Format::new()
            .set_bold()
            .set_font_size(14)
            .set_font_color("#FFFFFF")
            .set_background_color("#4C6EF5")
            .set_align(rust_xlsxwriter::FormatAlign::Left)
            .set_align(rust_xlsxwriter::FormatAlign::VerticalCenter)
            .set_border(rust_xlsxwriter::FormatBorder::None)
    }

    ///
    /// Returns the eponymous cell format.
    ///
    fn column_header_format() -> rust_xlsxwriter::Format {
        rust_xlsxwriter::Format::new()
            .set_bold()
            .set_font_size(12)
            .set_font_color("#1E1E1E")
            .set_background_color("#EEF3FF")
            .set_align(rust_xlsxwriter::FormatAlign::Center)
            .set_border(rust_xlsxwriter::FormatBorder::None)
    }

    ///
    /// Returns the eponymous cell format.
    ///
    fn row_header_format() -> rust_xlsxwriter::Format {
        rust_xlsxwriter::Format::new()
            .set_font_size(12)
            .set_font_color("#1E1E1E")
            .set_background_color("#DDE6FF")
            .set_align(rust_xlsxwriter::FormatAlign::Left)
            .set_border(rust_xlsxwriter::FormatBorder::None)
    }

    ///
    /// Returns the eponymous cell format.
    ///
    fn value_format() -> rust_xlsxwriter::Format {
        rust_xlsxwriter::Format::new()
            .set_font_size(12)
            .set_font_color("#000000")
            .set_align(rust_xlsxwriter::FormatAlign::Right)
            .set_border(rust_xlsxwriter::FormatBorder::None)
            .set_num_format("0.000")
    }

    ///
    /// Returns the eponymous cell format.
    ///
    fn percent_format() -> rust_xlsxwriter::Format {
        Self::value_format().set_num_format("0.00%")
    }
}
