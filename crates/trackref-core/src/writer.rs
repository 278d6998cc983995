//! CSV export of a filtered reference table

use crate::error::{Error, Result};
use crate::table::ReferenceTable;
use std::io::Write;
use std::path::Path;
use tracing::debug;

/// Write `table` to `path` as CSV, replacing any existing file
///
/// The header and column order are those of the loaded table. No index
/// column is added.
pub fn write_filtered_table<P: AsRef<Path>>(table: &ReferenceTable, path: P) -> Result<()> {
    let path = path.as_ref();
    let to_output_error = |source: csv::Error| Error::OutputWrite {
        path: path.to_path_buf(),
        source,
    };

    let writer = csv::Writer::from_path(path).map_err(to_output_error)?;
    write_table_to(table, writer).map_err(to_output_error)?;

    debug!(path = %path.display(), rows = table.row_count(), "wrote filtered table");
    Ok(())
}

/// Write `table` as CSV into any writer
pub fn write_table_to<W: Write>(
    table: &ReferenceTable,
    mut writer: csv::Writer<W>,
) -> std::result::Result<(), csv::Error> {
    writer.write_record(table.columns.iter().map(|c| c.name.as_str()))?;
    for row in &table.rows {
        writer.write_record(&row.cells)?;
    }
    writer.flush()?;
    Ok(())
}
