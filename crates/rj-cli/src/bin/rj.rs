//! rj CLI Binary
//!
//! Translates a resolved RPG compilation unit (JSON) into a Java class.
//!
//! # Usage
//!
//! ```bash
//! # Print the Java class for CALCFIB
//! rj CALCFIB.json
//!
//! # Choose the class name and show the IR instead
//! rj CALCFIB.json --name CalcFib --emit ir
//! ```

use clap::{CommandFactory, Parser, ValueEnum};
use rj_cli::{
    cli::CliConfig,
    commands::{translate_command, TranslateArgs},
    diagnostics::{render_cli_error, setup_error_reporting},
    CliError, Result,
};
use std::path::PathBuf;
use tracing::{error, info};

#[derive(Parser)]
#[command(
    name = "rj",
    version = env!("CARGO_PKG_VERSION"),
    about = "Translate resolved RPG programs into Java"
)]
struct Cli {
    #[command(flatten)]
    translate: TranslateArgs,

    /// Enable verbose logging (use multiple times for increased verbosity)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long)]
    quiet: bool,

    /// Set log level (overrides --verbose/--quiet)
    #[arg(long, value_enum)]
    log: Option<LogLevel>,

    /// Set log output format
    #[arg(long, value_enum, default_value = "pretty")]
    log_format: LogFormat,

    /// Configuration file path
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum LogFormat {
    Pretty,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_error_reporting()?;
    setup_logging(cli.verbose, cli.quiet, cli.log, cli.log_format);

    let result = CliConfig::load(cli.config.as_deref())
        .and_then(|config| translate_command(&cli.translate, &config));

    match result {
        Ok(output) => {
            print!("{}", output);
            if cli.verbose > 0 {
                info!("Translation completed successfully");
            }
            Ok(())
        }
        Err(CliError::InvalidInput(message)) => {
            eprintln!("error: {}\n\n{}", message, Cli::command().render_usage());
            std::process::exit(1);
        }
        Err(e) => {
            if !render_cli_error(&e) {
                error!("{}", e);
            }
            if cli.verbose > 0 {
                error!(?e, "detailed error context");
            }
            std::process::exit(1);
        }
    }
}

/// Logs go to stderr so stdout carries only the generated source.
fn setup_logging(verbose: u8, quiet: bool, log_level: Option<LogLevel>, log_format: LogFormat) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = if let Some(level) = log_level {
        EnvFilter::new(match level {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        })
    } else if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("warn"),
            1 => EnvFilter::new("info"),
            2 => EnvFilter::new("debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    let formatter = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_timer(tracing_subscriber::fmt::time::uptime())
        .with_level(true);

    match log_format {
        LogFormat::Pretty => {
            tracing_subscriber::registry()
                .with(formatter)
                .with(filter)
                .init();
        }
        LogFormat::Json => {
            tracing_subscriber::registry()
                .with(formatter.json())
                .with(filter)
                .init();
        }
    }
}
