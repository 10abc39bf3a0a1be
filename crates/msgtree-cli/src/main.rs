//! msgtree CLI entry point.
//!
//! Provides command-line tools for working with JSON message tables:
//! - `msgtree t` - Translate a key
//! - `msgtree split` - Split a translation around a placeholder
//! - `msgtree coverage` - Report translation coverage across languages
//! - `msgtree check` - Validate a message table

mod commands;
mod host;
mod output;

use std::io;
use std::process::exit;

use clap::{Parser, Subcommand, ValueEnum};
use commands::{
    run_check, run_coverage, run_split, run_translate, CheckArgs, CoverageArgs, SplitArgs,
    TranslateArgs,
};
use tracing_subscriber::EnvFilter;

/// msgtree message table tools.
#[derive(Debug, Parser)]
#[command(name = "msgtree")]
#[command(about = "msgtree message table tools", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Color output control
    #[arg(long, value_enum, default_value_t = ColorWhen::Auto, global = true)]
    pub color: ColorWhen,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// When to use colored output.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Translate a dot-path key
    T(TranslateArgs),
    /// Split a translation around a placeholder
    Split(SplitArgs),
    /// Report translation coverage across languages
    Coverage(CoverageArgs),
    /// Validate a message table
    Check(CheckArgs),
}

/// Set up color output based on user preference.
fn setup_colors(color_when: ColorWhen) {
    match color_when {
        ColorWhen::Auto => {
            // owo-colors automatically checks TTY, NO_COLOR, FORCE_COLOR
        }
        ColorWhen::Always => {
            owo_colors::set_override(true);
        }
        ColorWhen::Never => {
            owo_colors::set_override(false);
        }
    }
}

/// Send library logs to stderr. `--verbose` wins over `RUST_LOG`.
fn setup_tracing(verbose: bool, color_when: ColorWhen) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .with_ansi(!matches!(color_when, ColorWhen::Never))
        .init();
}

fn main() -> miette::Result<()> {
    let cli = Cli::parse();
    setup_colors(cli.color);
    setup_tracing(cli.verbose, cli.color);

    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .build(),
        )
    }))?;

    let result = match cli.command {
        Commands::T(args) => run_translate(args),
        Commands::Split(args) => run_split(args),
        Commands::Coverage(args) => run_coverage(args),
        Commands::Check(args) => run_check(args),
    };

    match result {
        Ok(code) => exit(code),
        Err(e) => {
            eprintln!("{:?}", e);
            exit(exitcode::SOFTWARE);
        }
    }
}
