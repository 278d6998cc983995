//! Core table types for the track reference data

use std::path::PathBuf;

/// Join key column
pub const ID_COLUMN: &str = "musicbrainz_id";
/// Display column for the track title
pub const TITLE_COLUMN: &str = "title";
/// Display column for the track artist
pub const ARTIST_COLUMN: &str = "artist";

/// A parsed reference table
///
/// Rows keep file order and every cell is kept as the raw string from the
/// CSV, so extra columns pass through untouched.
#[derive(Debug, Clone)]
pub struct ReferenceTable {
    /// Column definitions in header order
    pub columns: Vec<Column>,
    /// Row data
    pub rows: Vec<ReferenceRecord>,
    /// Source file path
    pub source_path: PathBuf,
    /// Positions of the join and display columns
    pub keys: KeyColumns,
}

/// Positions of the required columns within a row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyColumns {
    pub id: usize,
    pub title: usize,
    pub artist: usize,
}

impl ReferenceTable {
    /// Create a new empty table with the given header
    pub fn new(source_path: PathBuf, columns: Vec<Column>, keys: KeyColumns) -> Self {
        Self {
            columns,
            rows: Vec::new(),
            source_path,
            keys,
        }
    }

    /// Copy of this table's header with a different set of rows
    pub fn with_rows(&self, rows: Vec<ReferenceRecord>) -> Self {
        Self {
            columns: self.columns.clone(),
            rows,
            source_path: self.source_path.clone(),
            keys: self.keys,
        }
    }

    /// Get the number of columns
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Get the number of rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Column names in header order
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// The `musicbrainz_id` of a row
    pub fn id_of<'a>(&self, row: &'a ReferenceRecord) -> &'a str {
        row.get(self.keys.id).unwrap_or_default()
    }

    pub fn title_of<'a>(&self, row: &'a ReferenceRecord) -> &'a str {
        row.get(self.keys.title).unwrap_or_default()
    }

    pub fn artist_of<'a>(&self, row: &'a ReferenceRecord) -> &'a str {
        row.get(self.keys.artist).unwrap_or_default()
    }
}

/// A column definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    /// Column name as written in the header
    pub name: String,
    /// Column index (0-based)
    pub index: usize,
}

impl Column {
    /// Create a new column
    pub fn new(name: String, index: usize) -> Self {
        Self { name, index }
    }
}

/// One row of the reference table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceRecord {
    /// Cell values, one per column
    pub cells: Vec<String>,
}

impl ReferenceRecord {
    pub fn new(cells: Vec<String>) -> Self {
        Self { cells }
    }

    /// Get a cell value by column index
    pub fn get(&self, index: usize) -> Option<&str> {
        self.cells.get(index).map(String::as_str)
    }
}
