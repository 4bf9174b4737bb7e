//! Command-line interface for scoring club cohorts.
//!
//! The `score` subcommand loads a cohort snapshot file — a JSON array of
//! club profiles carrying the collaborator data shapes — runs the scoring
//! pipeline with the default log-dampened policy, and renders the ranked
//! result as plain text or JSON. Acquisition of the snapshots themselves
//! (Instagram fetching, chat-log parsing) is out of scope; this tool only
//! consumes their agreed output shapes.

#![forbid(unsafe_code)]

use std::fs::File;
use std::io::{self, BufWriter, Write};

use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand, ValueEnum};
use thiserror::Error;

use clubpulse_core::{ClubProfile, DEFAULT_MAX_GAP_DAYS, WeightSet, WeightSetError};
use clubpulse_scorer::{LogDampenedPolicy, group_by_category, rank, score_cohort};

mod report;

use report::Report;

/// Run the Clubpulse CLI with the current process arguments.
///
/// # Errors
/// Returns [`CliError`] when argument parsing, input loading, or output
/// rendering fails. Scoring itself is infallible.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    run_command(&cli.command)
}

fn run_command(command: &Command) -> Result<(), CliError> {
    match command {
        Command::Score(args) => run_score(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "clubpulse",
    about = "Rank club social activity from collaborator snapshots",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Score a cohort snapshot and render the ranking.
    Score(ScoreArgs),
}

/// CLI arguments for the `score` subcommand.
#[derive(Debug, Clone, Parser)]
struct ScoreArgs {
    /// Path to the cohort snapshot: a JSON array of club profiles.
    #[arg(long, value_name = "path")]
    input: Utf8PathBuf,
    /// Quiet-gap threshold, in whole days, separating two activity events.
    #[arg(long, value_name = "days", default_value_t = DEFAULT_MAX_GAP_DAYS)]
    max_gap_days: u32,
    /// Optional JSON file overriding the default signal weights.
    #[arg(long, value_name = "path")]
    weights: Option<Utf8PathBuf>,
    /// Output format for the report.
    #[arg(long, value_enum, default_value = "text")]
    format: Format,
    /// Write the report to this file instead of standard output.
    #[arg(long, value_name = "path")]
    output: Option<Utf8PathBuf>,
}

/// Report rendering formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Human-readable ranking and category tables.
    Text,
    /// Machine-readable JSON report.
    Json,
}

/// Errors raised by the command-line driver.
#[derive(Debug, Error)]
pub enum CliError {
    /// The command line could not be parsed.
    #[error(transparent)]
    ArgumentParsing(clap::Error),
    /// The cohort snapshot file could not be read.
    #[error("failed to read cohort snapshot at {path}")]
    ReadInput {
        /// Requested snapshot path.
        path: Utf8PathBuf,
        /// Source error from std I/O.
        #[source]
        source: io::Error,
    },
    /// The cohort snapshot was not valid JSON of the expected shape.
    #[error("failed to parse cohort snapshot at {path}")]
    ParseInput {
        /// Requested snapshot path.
        path: Utf8PathBuf,
        /// Source error from `serde_json`.
        #[source]
        source: serde_json::Error,
    },
    /// The weights file could not be read.
    #[error("failed to read weights file at {path}")]
    ReadWeights {
        /// Requested weights path.
        path: Utf8PathBuf,
        /// Source error from std I/O.
        #[source]
        source: io::Error,
    },
    /// The weights file was not valid JSON of the expected shape.
    #[error("failed to parse weights file at {path}")]
    ParseWeights {
        /// Requested weights path.
        path: Utf8PathBuf,
        /// Source error from `serde_json`.
        #[source]
        source: serde_json::Error,
    },
    /// The supplied weights were rejected by validation.
    #[error("invalid weights")]
    InvalidWeights(#[source] WeightSetError),
    /// The report could not be written.
    #[error("failed to write report")]
    WriteReport(#[source] io::Error),
    /// The output file could not be created.
    #[error("failed to create output file at {path}")]
    CreateOutput {
        /// Requested output path.
        path: Utf8PathBuf,
        /// Source error from std I/O.
        #[source]
        source: io::Error,
    },
}

fn run_score(args: &ScoreArgs) -> Result<(), CliError> {
    let cohort = load_cohort(&args.input)?;
    let policy = load_policy(args.weights.as_deref())?;

    let ranked = rank(score_cohort(&cohort, &policy, args.max_gap_days));
    let categories = group_by_category(&ranked);
    let report = Report::new(&ranked, &categories);

    match args.output.as_deref() {
        Some(path) => {
            let file = File::create(path.as_std_path()).map_err(|source| {
                CliError::CreateOutput {
                    path: path.to_path_buf(),
                    source,
                }
            })?;
            let mut writer = BufWriter::new(file);
            render(&report, args.format, &mut writer)?;
            writer.flush().map_err(CliError::WriteReport)
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            render(&report, args.format, &mut handle)
        }
    }
}

fn render<W: Write>(report: &Report<'_>, format: Format, out: &mut W) -> Result<(), CliError> {
    match format {
        Format::Text => report.write_text(out).map_err(CliError::WriteReport),
        Format::Json => report.write_json(out).map_err(CliError::WriteReport),
    }
}

fn load_cohort(path: &Utf8Path) -> Result<Vec<ClubProfile>, CliError> {
    let raw = std::fs::read_to_string(path.as_std_path()).map_err(|source| {
        CliError::ReadInput {
            path: path.to_path_buf(),
            source,
        }
    })?;
    serde_json::from_str(&raw).map_err(|source| CliError::ParseInput {
        path: path.to_path_buf(),
        source,
    })
}

fn load_policy(weights_path: Option<&Utf8Path>) -> Result<LogDampenedPolicy, CliError> {
    let Some(path) = weights_path else {
        return Ok(LogDampenedPolicy::default());
    };
    let raw = std::fs::read_to_string(path.as_std_path()).map_err(|source| {
        CliError::ReadWeights {
            path: path.to_path_buf(),
            source,
        }
    })?;
    let weights: WeightSet = serde_json::from_str(&raw).map_err(|source| {
        CliError::ParseWeights {
            path: path.to_path_buf(),
            source,
        }
    })?;
    LogDampenedPolicy::new(weights).map_err(CliError::InvalidWeights)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn score_args_parse_with_defaults() {
        let cli = Cli::try_parse_from(["clubpulse", "score", "--input", "cohort.json"]);
        let Ok(cli) = cli else {
            panic!("expected arguments to parse");
        };
        let Command::Score(args) = cli.command;
        assert_eq!(args.input, Utf8PathBuf::from("cohort.json"));
        assert_eq!(args.max_gap_days, DEFAULT_MAX_GAP_DAYS);
        assert_eq!(args.format, Format::Text);
        assert!(args.weights.is_none());
        assert!(args.output.is_none());
    }

    #[rstest]
    fn score_args_accept_overrides() {
        let cli = Cli::try_parse_from([
            "clubpulse",
            "score",
            "--input",
            "cohort.json",
            "--max-gap-days",
            "7",
            "--format",
            "json",
            "--output",
            "report.json",
        ]);
        let Ok(cli) = cli else {
            panic!("expected arguments to parse");
        };
        let Command::Score(args) = cli.command;
        assert_eq!(args.max_gap_days, 7);
        assert_eq!(args.format, Format::Json);
        assert_eq!(args.output, Some(Utf8PathBuf::from("report.json")));
    }

    #[rstest]
    fn missing_input_is_an_argument_error() {
        let cli = Cli::try_parse_from(["clubpulse", "score"]);
        assert!(cli.is_err());
    }

    fn utf8_path(path: &std::path::Path) -> Utf8PathBuf {
        match Utf8PathBuf::from_path_buf(path.to_path_buf()) {
            Ok(path) => path,
            Err(_) => panic!("temporary path should be UTF-8"),
        }
    }

    #[rstest]
    fn scores_a_cohort_file_end_to_end() {
        let dir = match tempfile::tempdir() {
            Ok(dir) => dir,
            Err(err) => panic!("create temporary directory: {err}"),
        };
        let input = utf8_path(&dir.path().join("cohort.json"));
        let output = utf8_path(&dir.path().join("report.json"));

        let cohort = serde_json::json!([
            {
                "name": "Coding Club",
                "category": "Tech",
                "instagram": {
                    "num_posts": 25,
                    "likes_sum": 25000,
                    "comments_sum": 1200,
                    "followers": 1500,
                    "post_dates": [
                        "2025-08-01T00:00:00Z",
                        "2025-08-03T00:00:00Z",
                        "2025-08-05T00:00:00Z",
                        "2025-08-20T00:00:00Z",
                        "2025-08-22T00:00:00Z",
                        "2025-08-25T00:00:00Z"
                    ]
                },
                "whatsapp": { "total_messages": 8500, "num_participants": 45 }
            },
            { "name": "Chess Club" }
        ]);
        let Ok(()) = std::fs::write(input.as_std_path(), cohort.to_string()) else {
            panic!("write cohort snapshot");
        };

        let args = ScoreArgs {
            input,
            max_gap_days: DEFAULT_MAX_GAP_DAYS,
            weights: None,
            format: Format::Json,
            output: Some(output.clone()),
        };
        let Ok(()) = run_score(&args) else {
            panic!("expected scoring to succeed");
        };

        let raw = match std::fs::read_to_string(output.as_std_path()) {
            Ok(raw) => raw,
            Err(err) => panic!("read report: {err}"),
        };
        let report: serde_json::Value = match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(err) => panic!("report should be valid JSON: {err}"),
        };
        let clubs = report.get("clubs").and_then(serde_json::Value::as_array);
        let Some(clubs) = clubs else {
            panic!("report should carry a clubs array");
        };
        assert_eq!(clubs.len(), 2);
        let first = clubs.first();
        assert_eq!(
            first.and_then(|club| club.get("name")).and_then(serde_json::Value::as_str),
            Some("Coding Club")
        );
        assert_eq!(
            first
                .and_then(|club| club.get("normalized_score"))
                .and_then(serde_json::Value::as_f64),
            Some(1.0)
        );
    }

    #[rstest]
    fn rejects_negative_weights_file() {
        let dir = match tempfile::tempdir() {
            Ok(dir) => dir,
            Err(err) => panic!("create temporary directory: {err}"),
        };
        let path = utf8_path(&dir.path().join("weights.json"));
        let Ok(()) = std::fs::write(
            path.as_std_path(),
            r#"{ "avg_likes_per_post": -0.3 }"#,
        ) else {
            panic!("write weights file");
        };

        let result = load_policy(Some(&path));
        assert!(matches!(result, Err(CliError::InvalidWeights(_))));
    }

    #[rstest]
    fn missing_input_file_surfaces_read_error() {
        let args = ScoreArgs {
            input: Utf8PathBuf::from("does-not-exist.json"),
            max_gap_days: DEFAULT_MAX_GAP_DAYS,
            weights: None,
            format: Format::Text,
            output: None,
        };
        let result = run_score(&args);
        assert!(matches!(result, Err(CliError::ReadInput { .. })));
    }
}
