use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::errors::ExportError;
use crate::spreadsheets::ListingTable;

/// UTF-8 byte-order mark, so spreadsheet apps pick the right encoding for
/// prices like "€350,000".
const BOM: &str = "\u{feff}";

pub fn export_listings_delimited(
    table: &ListingTable,
    path: &Path,
    delimiter: char,
) -> Result<(), ExportError> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_delimited(table, &mut writer, delimiter)?;
    writer.flush()?;
    Ok(())
}

/// Header row, then one line per record. No index column; missing values
/// are empty fields.
pub fn write_delimited<W: Write>(
    table: &ListingTable,
    writer: &mut W,
    delimiter: char,
) -> Result<(), ExportError> {
    if matches!(delimiter, '"' | '\r' | '\n') {
        return Err(ExportError::Delimiter(delimiter));
    }

    write!(writer, "{BOM}")?;

    let header: Vec<String> = table
        .columns()
        .iter()
        .map(|name| escape_field(name, delimiter))
        .collect();
    write_line(writer, &header, delimiter)?;

    for record in table.rows() {
        let fields: Vec<String> = record
            .cells()
            .iter()
            .map(|cell| escape_field(cell.as_deref().unwrap_or(""), delimiter))
            .collect();
        write_line(writer, &fields, delimiter)?;
    }

    Ok(())
}

fn write_line<W: Write>(writer: &mut W, fields: &[String], delimiter: char) -> Result<(), ExportError> {
    let line = fields.join(&delimiter.to_string());
    writer.write_all(line.as_bytes())?;
    writer.write_all(b"\r\n")?;
    Ok(())
}

fn escape_field(value: &str, delimiter: char) -> String {
    let needs_quotes = value.contains(delimiter)
        || value.contains('"')
        || value.contains('\n')
        || value.contains('\r');

    if needs_quotes {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
