//! Run configuration

use crate::report::DEFAULT_PREVIEW_LIMIT;
use crate::scanner::DEFAULT_EXTENSION;
use std::path::PathBuf;

pub const DEFAULT_INPUT: &str = "track_reference.csv";
pub const DEFAULT_AUDIO_DIR: &str = "rec";
pub const DEFAULT_OUTPUT: &str = "track_reference_filtered.csv";

/// How the summary is printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

/// Paths and options for one reconciliation run
///
/// The defaults are relative to the working directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReconcileConfig {
    /// Reference table to filter
    pub input: PathBuf,
    /// Directory holding the audio files
    pub audio_dir: PathBuf,
    /// Where the filtered table is written
    pub output: PathBuf,
    /// Audio file extension, leading dot optional
    pub extension: String,
    /// Entries shown per discrepancy list
    pub preview_limit: usize,
    pub format: ReportFormat,
    /// Report without writing `output`
    pub dry_run: bool,
}

impl Default for ReconcileConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            audio_dir: PathBuf::from(DEFAULT_AUDIO_DIR),
            output: PathBuf::from(DEFAULT_OUTPUT),
            extension: DEFAULT_EXTENSION.to_string(),
            preview_limit: DEFAULT_PREVIEW_LIMIT,
            format: ReportFormat::Text,
            dry_run: false,
        }
    }
}

impl ReconcileConfig {
    /// Default file names resolved against `root` instead of the working directory
    pub fn in_dir<P: Into<PathBuf>>(root: P) -> Self {
        let root = root.into();
        Self {
            input: root.join(DEFAULT_INPUT),
            audio_dir: root.join(DEFAULT_AUDIO_DIR),
            output: root.join(DEFAULT_OUTPUT),
            ..Self::default()
        }
    }
}
