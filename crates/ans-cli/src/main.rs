//! Airport Network Survey CLI.

use clap::{ColorChoice, Parser};
use std::io::{self, IsTerminal};
use tracing::level_filters::LevelFilter;

use ans_cli::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use ans_cli::commands::{
    run_aggregate, run_combine, run_compare, run_map, run_metrics, run_summary,
};
use ans_cli::logging::{LogConfig, LogFormat, init_logging};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match cli.command {
        Command::Combine(args) => match run_combine(&args) {
            Ok(summary) => {
                println!(
                    "Combined {} file(s) into {} ({} rows, {} columns)",
                    summary.file_count,
                    summary.out.display(),
                    summary.row_count,
                    summary.column_count
                );
                0
            }
            Err(error) => report(&error),
        },
        Command::Metrics(args) => run_metrics(&args).map_or_else(|e| report(&e), |()| 0),
        Command::Summary(args) => run_summary(&args).map_or_else(|e| report(&e), |()| 0),
        Command::Aggregate(args) => run_aggregate(&args).map_or_else(|e| report(&e), |()| 0),
        Command::Compare(args) => run_compare(&args).map_or_else(|e| report(&e), |()| 0),
        Command::Map(args) => run_map(&args).map_or_else(|e| report(&e), |()| 0),
    };
    std::process::exit(exit_code);
}

fn report(error: &anyhow::Error) -> i32 {
    eprintln!("error: {error:#}");
    1
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
