//! Implementation of the `msgtree check` command.

use std::path::PathBuf;

use miette::IntoDiagnostic;
use msgtree::TableWarning;
use owo_colors::OwoColorize;
use serde::Serialize;

use super::load_table;

/// Arguments for the check command.
#[derive(Debug, clap::Args)]
pub struct CheckArgs {
    /// JSON message table keyed by language code
    #[arg(short, long, required = true)]
    pub messages: PathBuf,

    /// Exit with non-zero code if any warning is reported
    #[arg(long)]
    pub strict: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for a single warning.
#[derive(Serialize)]
struct WarningJson {
    language: String,
    path: String,
    message: String,
}

impl From<&TableWarning> for WarningJson {
    fn from(warning: &TableWarning) -> Self {
        WarningJson {
            language: warning.language().to_string(),
            path: warning.path().to_string(),
            message: warning.to_string(),
        }
    }
}

/// Run the check command.
///
/// A file that fails to parse, or has no default-language tree, is reported
/// as a diagnostic error.
pub fn run_check(args: CheckArgs) -> miette::Result<i32> {
    let table = load_table(&args.messages)?;
    let warnings = table.validate_all();

    if args.json {
        let output: Vec<WarningJson> = warnings.iter().map(WarningJson::from).collect();
        println!("{}", serde_json::to_string_pretty(&output).into_diagnostic()?);
    } else {
        for warning in &warnings {
            eprintln!("{} {}", "warning:".yellow().bold(), warning);
        }

        let messages = table.default_tree().paths().len();
        if warnings.is_empty() {
            println!(
                "{} {} languages, {} messages",
                "ok:".green().bold(),
                table.len(),
                messages
            );
        } else {
            println!(
                "{} {} languages, {} messages, {} warnings",
                "checked:".bold(),
                table.len(),
                messages,
                warnings.len()
            );
        }
    }

    if args.strict && !warnings.is_empty() {
        Ok(exitcode::DATAERR)
    } else {
        Ok(exitcode::OK)
    }
}
