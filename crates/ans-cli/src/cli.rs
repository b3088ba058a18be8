//! CLI argument definitions for the survey tools.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "ans",
    version,
    about = "Airport Network Survey - combine and analyze wireless survey samples",
    long_about = "Combine raw per-dataset survey sheets into one samples table and\n\
                  analyze it: cohort filtering, per-landmark metric means, and a\n\
                  geo-joined map layer over the airport gate registry."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Combine raw per-dataset sample files into one samples table.
    Combine(CombineArgs),

    /// List the selectable metric columns of a combined samples file.
    Metrics(MetricsArgs),

    /// Print summary statistics for a cohort.
    Summary(CohortArgs),

    /// Print per-landmark means of a metric for a cohort.
    Aggregate(AggregateArgs),

    /// Compare Wi-Fi vs. cellular Ookla means for a cohort.
    Compare(CompareArgs),

    /// Build the geo-joined map layer for a metric as JSON.
    Map(MapArgs),
}

#[derive(Parser)]
pub struct CombineArgs {
    /// Directory containing the raw per-dataset CSV files.
    #[arg(value_name = "SAMPLES_DIR")]
    pub samples_dir: PathBuf,

    /// Output path for the combined CSV.
    #[arg(long = "out", value_name = "FILE", default_value = "samples_combined.csv")]
    pub out: PathBuf,
}

#[derive(Parser)]
pub struct MetricsArgs {
    /// Path to the combined samples CSV.
    #[arg(value_name = "COMBINED_CSV")]
    pub combined: PathBuf,
}

#[derive(Parser)]
pub struct CohortArgs {
    /// Path to the combined samples CSV.
    #[arg(value_name = "COMBINED_CSV")]
    pub combined: PathBuf,

    /// Datasets to include (default: all present).
    #[arg(long = "dataset", value_name = "NAME")]
    pub datasets: Vec<String>,

    /// Device types to include (default: all present).
    #[arg(long = "device", value_name = "NAME")]
    pub devices: Vec<String>,
}

#[derive(Parser)]
pub struct CompareArgs {
    #[command(flatten)]
    pub cohort: CohortArgs,

    /// Also break each comparison down per landmark.
    #[arg(long = "by-landmark")]
    pub by_landmark: bool,
}

#[derive(Parser)]
pub struct AggregateArgs {
    #[command(flatten)]
    pub cohort: CohortArgs,

    /// Metric column to average per landmark.
    #[arg(long = "metric", value_name = "COLUMN")]
    pub metric: String,
}

#[derive(Parser)]
pub struct MapArgs {
    #[command(flatten)]
    pub cohort: CohortArgs,

    /// Metric column to average per landmark.
    #[arg(long = "metric", value_name = "COLUMN")]
    pub metric: String,

    /// Path to the gate registry CSV.
    #[arg(long = "gates", value_name = "GATES_CSV")]
    pub gates: PathBuf,

    /// Write the map layer JSON to a file instead of stdout.
    #[arg(long = "out", value_name = "FILE")]
    pub out: Option<PathBuf>,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
