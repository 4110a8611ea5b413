// ClientSearch - app/report.rs
//
// Renders a QueryOutcome to any writer in the selected output format.

use crate::app::query::QueryOutcome;
use crate::core::export;
use crate::core::model::{ClientField, ClientRecord};
use crate::util::constants::{OUTPUT_COLUMNS, PRETTY_ABSENT};
use crate::util::error::ExportError;
use std::io::Write;

/// How query results are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Aligned text table for humans.
    #[default]
    Pretty,

    /// Pretty-printed JSON array of `{id, full_name, email}` objects.
    Json,

    /// CSV with a header row.
    Csv,
}

impl OutputFormat {
    /// Parse a config-file value. Case-insensitive.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "pretty" => Some(Self::Pretty),
            "json" => Some(Self::Json),
            "csv" => Some(Self::Csv),
            _ => None,
        }
    }
}

/// Write `outcome` to `writer`. Returns the number of records written.
///
/// Only the pretty format shows duplicate groups; JSON and CSV emit the
/// flat record list so their output stays machine-readable.
pub fn render<W: Write>(
    outcome: &QueryOutcome<'_>,
    format: OutputFormat,
    mut writer: W,
) -> Result<usize, ExportError> {
    match format {
        OutputFormat::Json => export::export_json(&outcome.records, writer),
        OutputFormat::Csv => export::export_csv(&outcome.records, writer),
        OutputFormat::Pretty => {
            if outcome.groups.is_empty() {
                write_table(&mut writer, &outcome.records, "")?;
            } else {
                for group in &outcome.groups {
                    writeln!(writer, "{} ({} records)", group.email, group.records.len())
                        .map_err(|e| ExportError::Io { source: e })?;
                    write_table(&mut writer, &group.records, "  ")?;
                }
            }
            let n = outcome.records.len();
            writeln!(writer, "{n} {}", if n == 1 { "match" } else { "matches" })
                .map_err(|e| ExportError::Io { source: e })?;
            Ok(n)
        }
    }
}

/// Aligned table with a header row. Writes nothing for an empty slice.
fn write_table<W: Write>(
    writer: &mut W,
    records: &[&ClientRecord],
    indent: &str,
) -> Result<(), ExportError> {
    if records.is_empty() {
        return Ok(());
    }

    let rows: Vec<[String; 3]> = records
        .iter()
        .map(|record| {
            let cell = |field: ClientField| {
                record
                    .field_value(field)
                    .map_or_else(|| PRETTY_ABSENT.to_string(), |v| v.into_owned())
            };
            [
                cell(ClientField::Id),
                cell(ClientField::FullName),
                cell(ClientField::Email),
            ]
        })
        .collect();

    let mut widths = OUTPUT_COLUMNS.map(|h| h.chars().count());
    for row in &rows {
        for (width, value) in widths.iter_mut().zip(row) {
            *width = (*width).max(value.chars().count());
        }
    }

    let header = OUTPUT_COLUMNS.map(str::to_string);
    for row in std::iter::once(&header).chain(rows.iter()) {
        writeln!(
            writer,
            "{indent}{:<w0$}  {:<w1$}  {}",
            row[0],
            row[1],
            row[2],
            w0 = widths[0],
            w1 = widths[1],
        )
        .map_err(|e| ExportError::Io { source: e })?;
    }
    Ok(())
}
