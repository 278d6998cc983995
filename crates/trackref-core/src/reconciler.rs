//! End-to-end run: load, scan, filter, write, report

use crate::config::{ReconcileConfig, ReportFormat};
use crate::error::Result;
use crate::parser::load_reference_table;
use crate::reconcile::{compute_filter, Reconciliation};
use crate::report::Report;
use crate::scanner::scan_audio_directory;
use crate::writer::write_filtered_table;
use std::fmt;
use std::io::Write;
use tracing::info;

/// Everything a run computed
#[derive(Debug, Clone)]
pub struct RunOutcome {
    pub reconciliation: Reconciliation,
    pub report: Report,
    /// False for dry runs
    pub output_written: bool,
}

/// Run the whole pipeline, printing progress and the report to `out`
///
/// Any failure aborts the run. The audio directory is scanned before the
/// output file is touched, so a missing directory leaves no output behind.
/// With [`ReportFormat::Json`] only the JSON document goes to `out`.
pub fn run<W: Write>(config: &ReconcileConfig, out: &mut W) -> Result<RunOutcome> {
    step(
        out,
        config,
        format_args!("Reading {}...", config.input.display()),
    )?;
    let table = load_reference_table(&config.input)?;
    step(
        out,
        config,
        format_args!("Original table has {} records", table.row_count()),
    )?;

    step(
        out,
        config,
        format_args!("Scanning {} for audio files...", config.audio_dir.display()),
    )?;
    let files = scan_audio_directory(&config.audio_dir, &config.extension)?;
    step(
        out,
        config,
        format_args!(
            "Found {} {} files in {}",
            files.len(),
            files.extension,
            config.audio_dir.display()
        ),
    )?;

    step(out, config, format_args!("Filtering records..."))?;
    let reconciliation = compute_filter(&table, &files);
    step(
        out,
        config,
        format_args!(
            "Filtered table has {} records",
            reconciliation.filtered.row_count()
        ),
    )?;
    step(
        out,
        config,
        format_args!(
            "Removed {} records that don't have corresponding audio files",
            reconciliation.removed_count()
        ),
    )?;

    let output_written = if config.dry_run {
        step(
            out,
            config,
            format_args!("Dry run, not writing {}", config.output.display()),
        )?;
        false
    } else {
        write_filtered_table(&reconciliation.filtered, &config.output)?;
        step(
            out,
            config,
            format_args!("Filtered table saved to: {}", config.output.display()),
        )?;
        true
    };

    let report = Report::new(&table, &files, &reconciliation, config.preview_limit);
    match config.format {
        ReportFormat::Text => {
            writeln!(out)?;
            report.write_text(out)?;
        }
        ReportFormat::Json => report.write_json(out)?,
    }

    Ok(RunOutcome {
        reconciliation,
        report,
        output_written,
    })
}

/// Progress line: logged always, printed only alongside a text report
fn step<W: Write>(
    out: &mut W,
    config: &ReconcileConfig,
    message: fmt::Arguments<'_>,
) -> Result<()> {
    info!("{}", message);
    if config.format == ReportFormat::Text {
        writeln!(out, "{}", message)?;
    }
    Ok(())
}
