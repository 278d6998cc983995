//! CSV parser for the track reference table

use crate::error::{Error, Result};
use crate::table::{
    Column, KeyColumns, ReferenceRecord, ReferenceTable, ARTIST_COLUMN, ID_COLUMN, TITLE_COLUMN,
};
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Load a reference table from a CSV file
///
/// The header must name `musicbrainz_id`, `title` and `artist`; any other
/// columns are carried along. Short rows are padded with empty cells, rows
/// with more cells than the header are rejected.
pub fn load_reference_table<P: AsRef<Path>>(path: P) -> Result<ReferenceTable> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => Error::InputNotFound {
            path: path.to_path_buf(),
        },
        _ => Error::FileRead {
            path: path.to_path_buf(),
            source: e,
        },
    })?;

    let table = parse_reader(BufReader::new(file), path.to_path_buf())?;
    debug!(
        path = %path.display(),
        rows = table.row_count(),
        columns = table.column_count(),
        "loaded reference table"
    );
    Ok(table)
}

/// Parse a reference table from a string (useful for testing)
pub fn parse_reference_str(content: &str, source_name: &str) -> Result<ReferenceTable> {
    parse_reader(content.as_bytes(), PathBuf::from(source_name))
}

fn parse_reader<R: Read>(reader: R, path: PathBuf) -> Result<ReferenceTable> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true) // Short rows are padded below
        .from_reader(reader);

    let headers = csv_reader.headers().map_err(|e| Error::Csv {
        path: path.clone(),
        source: e,
    })?;

    let columns: Vec<Column> = headers
        .iter()
        .enumerate()
        .map(|(i, name)| Column::new(name.to_string(), i))
        .collect();

    if columns.is_empty() || columns.iter().all(|c| c.name.is_empty()) {
        return Err(Error::InputMalformed {
            path,
            message: "no columns found in CSV".to_string(),
        });
    }

    let keys = KeyColumns {
        id: require_column(&columns, ID_COLUMN, &path)?,
        title: require_column(&columns, TITLE_COLUMN, &path)?,
        artist: require_column(&columns, ARTIST_COLUMN, &path)?,
    };

    let mut table = ReferenceTable::new(path, columns, keys);
    let width = table.column_count();

    for (row_idx, result) in csv_reader.records().enumerate() {
        let record = result.map_err(|e| Error::Csv {
            path: table.source_path.clone(),
            source: e,
        })?;

        if record.len() > width {
            let line = record
                .position()
                .map(|p| p.line())
                .unwrap_or(row_idx as u64 + 2);
            return Err(Error::InputMalformed {
                path: table.source_path.clone(),
                message: format!(
                    "line {} has {} fields, header has {}",
                    line,
                    record.len(),
                    width
                ),
            });
        }

        let mut cells: Vec<String> = record.iter().map(str::to_string).collect();
        cells.resize(width, String::new());

        table.rows.push(ReferenceRecord::new(cells));
    }

    Ok(table)
}

/// Index of a required column, by exact header name
fn require_column(columns: &[Column], name: &str, path: &Path) -> Result<usize> {
    columns
        .iter()
        .find(|c| c.name == name)
        .map(|c| c.index)
        .ok_or_else(|| Error::MissingColumn {
            path: path.to_path_buf(),
            column: name.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_parse_simple_csv() {
        let csv = "musicbrainz_id,title,artist\nA1,Song1,X\nA2,Song2,Y\n";
        let table = parse_reference_str(csv, "test.csv").unwrap();

        assert_eq!(table.column_names(), vec!["musicbrainz_id", "title", "artist"]);
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.id_of(&table.rows[0]), "A1");
        assert_eq!(table.title_of(&table.rows[1]), "Song2");
        assert_eq!(table.artist_of(&table.rows[1]), "Y");
    }

    #[test]
    fn test_extra_columns_pass_through() {
        let csv = "genre,musicbrainz_id,artist,title,year\nrock,A1,X,Song1,1999\n";
        let table = parse_reference_str(csv, "test.csv").unwrap();

        assert_eq!(table.keys.id, 1);
        assert_eq!(table.keys.artist, 2);
        assert_eq!(table.keys.title, 3);
        assert_eq!(table.rows[0].cells, vec!["rock", "A1", "X", "Song1", "1999"]);
    }

    #[test]
    fn test_id_kept_as_opaque_string() {
        let csv = "musicbrainz_id,title,artist\n00123,Song, X \n1.50,Other,Y\n";
        let table = parse_reference_str(csv, "test.csv").unwrap();

        assert_eq!(table.id_of(&table.rows[0]), "00123");
        assert_eq!(table.artist_of(&table.rows[0]), " X ");
        assert_eq!(table.id_of(&table.rows[1]), "1.50");
    }

    #[test]
    fn test_short_row_is_padded() {
        let csv = "musicbrainz_id,title,artist,year\nA1,Song1\n";
        let table = parse_reference_str(csv, "test.csv").unwrap();

        assert_eq!(table.rows[0].cells, vec!["A1", "Song1", "", ""]);
    }

    #[test]
    fn test_long_row_is_malformed() {
        let csv = "musicbrainz_id,title,artist\nA1,Song1,X,extra\n";
        let err = parse_reference_str(csv, "test.csv").unwrap_err();

        assert_eq!(err.kind(), ErrorKind::InputMalformed);
        assert!(err.to_string().contains("line 2"));
    }

    #[test]
    fn test_missing_required_column() {
        let csv = "musicbrainz_id,title\nA1,Song1\n";
        let err = parse_reference_str(csv, "test.csv").unwrap_err();

        assert_eq!(err.kind(), ErrorKind::InputMalformed);
        match err {
            Error::MissingColumn { column, .. } => assert_eq!(column, "artist"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_header_names_are_case_sensitive() {
        let csv = "MusicBrainz_ID,title,artist\nA1,Song1,X\n";
        let err = parse_reference_str(csv, "test.csv").unwrap_err();
        assert!(matches!(err, Error::MissingColumn { ref column, .. } if column == "musicbrainz_id"));
    }

    #[test]
    fn test_empty_input_is_malformed() {
        let err = parse_reference_str("", "test.csv").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InputMalformed);
    }

    #[test]
    fn test_header_only_is_empty_table() {
        let table = parse_reference_str("musicbrainz_id,title,artist\n", "test.csv").unwrap();
        assert!(table.is_empty());
        assert_eq!(table.column_count(), 3);
    }

    #[test]
    fn test_quoted_fields() {
        let csv = "musicbrainz_id,title,artist\nA1,\"Hello, World\",\"The \"\"Band\"\"\"\n";
        let table = parse_reference_str(csv, "test.csv").unwrap();

        assert_eq!(table.title_of(&table.rows[0]), "Hello, World");
        assert_eq!(table.artist_of(&table.rows[0]), "The \"Band\"");
    }

    #[test]
    fn test_invalid_utf8_is_malformed() {
        let bytes: &[u8] = b"musicbrainz_id,title,artist\nA1,\xff\xfe,X\n";
        let err = parse_reader(bytes, PathBuf::from("bin.csv")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InputMalformed);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_reference_table(dir.path().join("track_reference.csv")).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::InputNotFound);
        assert!(err.to_string().contains("track_reference.csv"));
    }

    #[test]
    fn test_load_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("track_reference.csv");
        std::fs::write(&path, "musicbrainz_id,title,artist\nA1,Song1,X\n").unwrap();

        let table = load_reference_table(&path).unwrap();
        assert_eq!(table.row_count(), 1);
        assert_eq!(table.source_path, path);
    }
}
