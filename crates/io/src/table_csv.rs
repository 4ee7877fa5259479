//! CSV output for combined tables.

use std::io::Write;
use std::path::Path;

use tracing::info;

use pluvio_series::CombinedTable;

use crate::error::IoError;

/// Timestamp layout used in the output, matching the ingestion side.
const TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Writes a combined table as CSV to any sink.
///
/// The header is `time` followed by the value column names in table order.
/// Absent cells (`None`) serialise as empty fields; present-but-missing data
/// serialises as `NaN`.
pub fn write_table_to(writer: impl Write, table: &CombinedTable) -> Result<(), IoError> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    let mut header = vec!["time".to_string()];
    header.extend(table.column_names().iter().map(|n| n.to_string()));
    csv_writer.write_record(&header)?;

    for (i, t) in table.times().iter().enumerate() {
        let mut record = vec![t.format(TIME_FORMAT).to_string()];
        for col in table.columns() {
            record.push(match col.values()[i] {
                Some(v) if v.is_nan() => "NaN".to_string(),
                Some(v) => v.to_string(),
                None => String::new(),
            });
        }
        csv_writer.write_record(&record)?;
    }

    csv_writer.flush().map_err(|e| IoError::Csv {
        reason: e.to_string(),
    })?;
    Ok(())
}

/// Writes a combined table as a CSV file at `path`.
///
/// # Errors
///
/// Returns [`IoError::Csv`] if the file cannot be created or written.
pub fn write_table(path: &Path, table: &CombinedTable) -> Result<(), IoError> {
    let file = std::fs::File::create(path).map_err(|e| IoError::Csv {
        reason: e.to_string(),
    })?;
    write_table_to(file, table)?;
    info!(
        path = %path.display(),
        n_rows = table.num_rows(),
        n_columns = table.columns().len(),
        "combined table written"
    );
    Ok(())
}
