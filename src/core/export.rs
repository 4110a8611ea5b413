// ClientSearch - core/export.rs
//
// CSV and JSON export of client records.
// Core layer: writes to any Write trait object.

use crate::core::model::{ClientField, ClientRecord};
use crate::util::constants::OUTPUT_COLUMNS;
use crate::util::error::ExportError;
use std::io::Write;

/// Export records to CSV format.
///
/// Writes: id, full_name, email. Absent values become empty cells.
pub fn export_csv<W: Write>(records: &[&ClientRecord], writer: W) -> Result<usize, ExportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record(OUTPUT_COLUMNS)
        .map_err(|e| ExportError::Csv { source: e })?;

    let mut count = 0;
    for record in records {
        let row: Vec<String> = ClientField::all()
            .iter()
            .map(|field| record.field_value(*field).unwrap_or_default().into_owned())
            .collect();

        csv_writer
            .write_record(&row)
            .map_err(|e| ExportError::Csv { source: e })?;
        count += 1;
    }

    csv_writer
        .flush()
        .map_err(|e| ExportError::Io { source: e })?;

    Ok(count)
}

/// Export records to JSON format (array of `{id, full_name, email}` objects).
pub fn export_json<W: Write>(
    records: &[&ClientRecord],
    mut writer: W,
) -> Result<usize, ExportError> {
    let mappings: Vec<_> = records.iter().map(|r| r.to_mapping()).collect();
    serde_json::to_writer_pretty(&mut writer, &mappings)
        .map_err(|e| ExportError::Json { source: e })?;
    writeln!(writer).map_err(|e| ExportError::Io { source: e })?;
    Ok(records.len())
}
