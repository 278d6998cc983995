//! trackref CLI
//!
//! Filters `track_reference.csv` down to the tracks that have an audio file
//! in `rec/`, and reports the rows and files that don't line up.

use clap::{Parser, ValueEnum};
use std::io::{self, Write};
use std::path::PathBuf;
use trackref_core::config::{DEFAULT_AUDIO_DIR, DEFAULT_INPUT, DEFAULT_OUTPUT};
use trackref_core::report::DEFAULT_PREVIEW_LIMIT;
use trackref_core::scanner::DEFAULT_EXTENSION;
use trackref_core::{run, ReconcileConfig, ReportFormat};

#[derive(Parser)]
#[command(name = "trackref")]
#[command(about = "Keep only the reference tracks that have audio on disk", long_about = None)]
#[command(version)]
struct Cli {
    /// Reference table to filter
    #[arg(short, long, default_value = DEFAULT_INPUT)]
    input: PathBuf,

    /// Directory holding the audio files
    #[arg(short = 'd', long, default_value = DEFAULT_AUDIO_DIR)]
    audio_dir: PathBuf,

    /// Where to write the filtered table
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Audio file extension
    #[arg(short, long, default_value = DEFAULT_EXTENSION)]
    extension: String,

    /// Maximum entries listed per discrepancy
    #[arg(short, long, default_value_t = DEFAULT_PREVIEW_LIMIT)]
    limit: usize,

    /// Summary format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Report only, don't write the filtered table
    #[arg(long)]
    dry_run: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

impl From<Cli> for ReconcileConfig {
    fn from(cli: Cli) -> Self {
        Self {
            input: cli.input,
            audio_dir: cli.audio_dir,
            output: cli.output,
            extension: cli.extension,
            preview_limit: cli.limit,
            format: match cli.format {
                Format::Text => ReportFormat::Text,
                Format::Json => ReportFormat::Json,
            },
            dry_run: cli.dry_run,
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    if let Err(e) = run_cli() {
        tracing::error!(error = %e, kind = ?e.kind(), "run aborted");
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_cli() -> trackref_core::Result<()> {
    let config = ReconcileConfig::from(Cli::parse());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(&config, &mut out)?;
    out.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_arguments_uses_fixed_paths() {
        let cli = Cli::try_parse_from(["trackref"]).unwrap();
        assert_eq!(ReconcileConfig::from(cli), ReconcileConfig::default());
    }

    #[test]
    fn test_flags_map_to_config() {
        let cli = Cli::try_parse_from([
            "trackref",
            "-i",
            "refs.csv",
            "-d",
            "audio",
            "-o",
            "kept.csv",
            "-e",
            "flac",
            "--limit",
            "3",
            "--format",
            "json",
            "--dry-run",
        ])
        .unwrap();
        let config = ReconcileConfig::from(cli);

        assert_eq!(config.input, PathBuf::from("refs.csv"));
        assert_eq!(config.audio_dir, PathBuf::from("audio"));
        assert_eq!(config.output, PathBuf::from("kept.csv"));
        assert_eq!(config.extension, "flac");
        assert_eq!(config.preview_limit, 3);
        assert_eq!(config.format, ReportFormat::Json);
        assert!(config.dry_run);
    }
}
