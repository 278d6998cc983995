//! trackref-core: Core library for reconciling a track reference table
//! against the audio files on disk
//!
//! This library provides functionality to:
//! - Load a CSV reference table keyed by `musicbrainz_id`
//! - List a directory for audio files with a given extension
//! - Keep only the rows whose `<id><ext>` file exists, and find the rows
//!   without a file and the files without a row
//! - Write the filtered table back out as CSV and summarise the differences

pub mod config;
pub mod error;
pub mod parser;
pub mod reconcile;
pub mod reconciler;
pub mod report;
pub mod scanner;
pub mod table;
pub mod writer;

pub use config::{ReconcileConfig, ReportFormat};
pub use error::{Error, ErrorKind, Result};
pub use parser::{load_reference_table, parse_reference_str};
pub use reconcile::{audio_file_name, compute_filter, Reconciliation};
pub use reconciler::{run, RunOutcome};
pub use report::{MissingEntry, Report};
pub use scanner::{scan_audio_directory, AudioFileSet};
pub use table::{Column, ReferenceRecord, ReferenceTable};
pub use writer::write_filtered_table;
