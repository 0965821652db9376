use rust_xlsxwriter::{Format, Workbook};
use std::path::Path;

use crate::errors::ExportError;
use crate::spreadsheets::ListingTable;

pub fn export_listings_xlsx(table: &ListingTable, path: &Path) -> Result<(), ExportError> {
    let mut workbook = build_workbook(table)?;
    workbook.save(path)?;
    Ok(())
}

fn build_workbook(table: &ListingTable) -> Result<Workbook, ExportError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("listings")?;

    // Headers
    let bold = Format::new().set_bold();
    for (col, header) in table.columns().iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *header, &bold)?;
    }
    worksheet.set_freeze_panes(1, 0)?;

    // Rows
    for (i, record) in table.rows().iter().enumerate() {
        let r = (i + 1) as u32;
        for (col, cell) in record.cells().iter().enumerate() {
            if let Some(value) = cell {
                worksheet.write_string(r, col as u16, value)?;
            }
        }
    }

    Ok(workbook)
}
