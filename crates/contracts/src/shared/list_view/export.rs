//! CSV rendering of a list for spreadsheet export

use super::record::Record;

/// Column of an exported file: header text and the record field it reads
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportColumn {
    pub header: &'static str,
    pub field: &'static str,
}

/// Render records as `;`-separated CSV prefixed with a UTF-8 BOM so that
/// spreadsheet tools detect the encoding of accented labels.
pub fn records_to_csv(records: &[Record], columns: &[ExportColumn]) -> Result<String, csv::Error> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b';')
        .from_writer(Vec::new());

    writer.write_record(columns.iter().map(|c| c.header))?;
    for record in records {
        writer.write_record(columns.iter().map(|c| record.text(c.field)))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| csv::Error::from(e.into_error()))?;
    let mut out = String::from('\u{FEFF}');
    out.push_str(&String::from_utf8_lossy(&bytes));
    Ok(out)
}
