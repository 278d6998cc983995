//! Matching table rows against audio files on disk
//!
//! Every row is tested on its own: a row is kept when
//! `musicbrainz_id + extension` names a scanned file. Rows sharing an id are
//! all kept or all dropped together, never deduplicated.

use crate::scanner::AudioFileSet;
use crate::table::{ReferenceRecord, ReferenceTable};
use std::collections::HashSet;
use tracing::{debug, warn};

/// Outcome of matching a reference table against an audio file set
#[derive(Debug, Clone)]
pub struct Reconciliation {
    /// Rows whose audio file exists, in table order
    pub filtered: ReferenceTable,
    /// Rows with no audio file, in table order
    pub missing: Vec<ReferenceRecord>,
    /// Audio file names no row points at, sorted
    pub orphans: Vec<String>,
    /// Ids appearing on more than one row, in order of first repeat
    pub duplicate_ids: Vec<String>,
}

impl Reconciliation {
    /// Number of rows dropped by the filter
    pub fn removed_count(&self) -> usize {
        self.missing.len()
    }
}

/// File name a row is expected to have on disk
pub fn audio_file_name(id: &str, extension: &str) -> String {
    format!("{}{}", id, extension)
}

/// Split `table` into kept and missing rows and find orphaned files
pub fn compute_filter(table: &ReferenceTable, files: &AudioFileSet) -> Reconciliation {
    let mut kept = Vec::new();
    let mut missing = Vec::new();
    let mut expected: HashSet<String> = HashSet::with_capacity(table.row_count());
    let mut duplicate_ids = Vec::new();
    let mut seen_duplicates: HashSet<&str> = HashSet::new();

    for row in &table.rows {
        let id = table.id_of(row);
        let name = audio_file_name(id, &files.extension);

        if files.contains(&name) {
            kept.push(row.clone());
        } else {
            missing.push(row.clone());
        }

        if !expected.insert(name) && seen_duplicates.insert(id) {
            duplicate_ids.push(id.to_string());
        }
    }

    let mut orphans: Vec<String> = files
        .iter()
        .filter(|name| !expected.contains(*name))
        .map(str::to_string)
        .collect();
    orphans.sort();

    if !duplicate_ids.is_empty() {
        warn!(count = duplicate_ids.len(), "reference table has duplicate ids");
    }
    debug!(
        kept = kept.len(),
        missing = missing.len(),
        orphans = orphans.len(),
        "reconciled table against audio files"
    );

    Reconciliation {
        filtered: table.with_rows(kept),
        missing,
        orphans,
        duplicate_ids,
    }
}
