use super::{ExportRow, HEADERS};
use crate::error::ScrapeError;
use crate::model::Recipe;
use log::info;
use rust_xlsxwriter::{Format, FormatAlign, Workbook};
use std::path::Path;

/// Extra width added to the longest cell of every column
pub const COLUMN_PADDING: usize = 4;

/// Write one formatted sheet with a header row and one row per recipe
///
/// Every cell is wrapped and top-left aligned, header cells are bold and
/// each column is as wide as its longest cell plus [`COLUMN_PADDING`].
pub fn export_to_spreadsheet(recipes: &[Recipe], path: impl AsRef<Path>) -> Result<(), ScrapeError> {
    let path = path.as_ref();
    let rows: Vec<ExportRow> = recipes.iter().map(ExportRow::from).collect();

    let cell_format = Format::new()
        .set_text_wrap()
        .set_align(FormatAlign::Top)
        .set_align(FormatAlign::Left);
    let header_format = cell_format.clone().set_bold();

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("Sheet1")?;

    for (col, header) in HEADERS.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *header, &header_format)?;
    }

    for (index, row) in rows.iter().enumerate() {
        let row_number = index as u32 + 1;
        for (col, value) in row.cells().into_iter().enumerate() {
            if value.is_empty() {
                worksheet.write_blank(row_number, col as u16, &cell_format)?;
            } else {
                worksheet.write_string_with_format(row_number, col as u16, value, &cell_format)?;
            }
        }
    }

    for (col, width) in column_widths(&rows).into_iter().enumerate() {
        worksheet.set_column_width(col as u16, width as f64)?;
    }

    workbook.save(path)?;
    info!("Wrote {} recipes to {}", rows.len(), path.display());

    Ok(())
}

/// Longest cell (header included) of each column in characters, plus padding
pub fn column_widths(rows: &[ExportRow]) -> [usize; 4] {
    let mut widths = HEADERS.map(|header| header.chars().count());

    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row.cells()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    widths.map(|width| width + COLUMN_PADDING)
}
