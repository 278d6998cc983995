//! Summary report of a reconciliation run

use crate::error::Result;
use crate::reconcile::Reconciliation;
use crate::scanner::AudioFileSet;
use crate::table::{ReferenceTable, ARTIST_COLUMN, ID_COLUMN, TITLE_COLUMN};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::io::{self, Write};
use std::path::PathBuf;

/// Number of entries listed per discrepancy list by default
pub const DEFAULT_PREVIEW_LIMIT: usize = 10;

/// A table row without an audio file, reduced to its display columns
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MissingEntry {
    pub musicbrainz_id: String,
    pub title: String,
    pub artist: String,
}

/// Counts plus a bounded preview of each discrepancy list
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub generated_at: DateTime<Utc>,
    pub source: PathBuf,
    pub audio_dir: PathBuf,
    pub extension: String,
    pub original_records: usize,
    pub audio_files: usize,
    pub filtered_records: usize,
    pub records_removed: usize,
    pub missing_total: usize,
    /// First `limit` missing rows, in table order
    pub missing: Vec<MissingEntry>,
    pub orphan_total: usize,
    /// First `limit` orphaned file names
    pub orphans: Vec<String>,
    pub duplicate_total: usize,
    pub duplicate_ids: Vec<String>,
}

impl Report {
    /// Build a report, keeping at most `limit` entries of each list
    pub fn new(
        original: &ReferenceTable,
        files: &AudioFileSet,
        result: &Reconciliation,
        limit: usize,
    ) -> Self {
        let missing = result
            .missing
            .iter()
            .take(limit)
            .map(|row| MissingEntry {
                musicbrainz_id: original.id_of(row).to_string(),
                title: original.title_of(row).to_string(),
                artist: original.artist_of(row).to_string(),
            })
            .collect();

        Self {
            generated_at: Utc::now(),
            source: original.source_path.clone(),
            audio_dir: files.dir.clone(),
            extension: files.extension.clone(),
            original_records: original.row_count(),
            audio_files: files.len(),
            filtered_records: result.filtered.row_count(),
            records_removed: result.removed_count(),
            missing_total: result.missing.len(),
            missing,
            orphan_total: result.orphans.len(),
            orphans: result.orphans.iter().take(limit).cloned().collect(),
            duplicate_total: result.duplicate_ids.len(),
            duplicate_ids: result.duplicate_ids.iter().take(limit).cloned().collect(),
        }
    }

    /// Human readable summary
    pub fn write_text<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let kind = self.file_kind();

        writeln!(out, "=== Summary ===")?;
        writeln!(out, "Original records: {}", self.original_records)?;
        writeln!(
            out,
            "{} files in {}: {}",
            kind,
            self.audio_dir.display(),
            self.audio_files
        )?;
        writeln!(out, "Filtered records: {}", self.filtered_records)?;
        writeln!(out, "Records removed: {}", self.records_removed)?;

        if self.missing_total > 0 {
            writeln!(out)?;
            writeln!(
                out,
                "{} records missing {} files (showing first {}):",
                self.missing_total,
                kind,
                self.missing.len()
            )?;
            writeln!(out, "{}\t{}\t{}", ID_COLUMN, TITLE_COLUMN, ARTIST_COLUMN)?;
            for entry in &self.missing {
                writeln!(
                    out,
                    "{}\t{}\t{}",
                    entry.musicbrainz_id, entry.title, entry.artist
                )?;
            }
            write_remainder(out, self.missing_total, self.missing.len())?;
        }

        if self.orphan_total > 0 {
            writeln!(out)?;
            writeln!(
                out,
                "Found {} {} files without table records:",
                self.orphan_total, kind
            )?;
            for name in &self.orphans {
                writeln!(out, "  {}", name)?;
            }
            write_remainder(out, self.orphan_total, self.orphans.len())?;
        }

        if self.duplicate_total > 0 {
            writeln!(out)?;
            writeln!(
                out,
                "Found {} ids on more than one record:",
                self.duplicate_total
            )?;
            for id in &self.duplicate_ids {
                writeln!(out, "  {}", id)?;
            }
            write_remainder(out, self.duplicate_total, self.duplicate_ids.len())?;
        }

        Ok(())
    }

    /// Machine readable summary
    pub fn write_json<W: Write>(&self, out: &mut W) -> Result<()> {
        serde_json::to_writer_pretty(&mut *out, self)?;
        writeln!(out)?;
        Ok(())
    }

    /// "WAV" for ".wav"
    fn file_kind(&self) -> String {
        self.extension.trim_start_matches('.').to_uppercase()
    }
}

fn write_remainder<W: Write>(out: &mut W, total: usize, shown: usize) -> io::Result<()> {
    if total > shown {
        writeln!(out, "  ... ({} more)", total - shown)?;
    }
    Ok(())
}
