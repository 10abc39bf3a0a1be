//! Coverage command implementation.

use std::path::PathBuf;

use clap::Args;
use miette::{IntoDiagnostic, Result};
use msgtree::{Coverage, LanguageCode};

use super::load_table;
use crate::output::table::format_coverage_table;

/// Arguments for the coverage command.
#[derive(Debug, Args)]
pub struct CoverageArgs {
    /// JSON message table keyed by language code.
    #[arg(short, long, required = true)]
    pub messages: PathBuf,

    /// Languages to check coverage for (comma-separated). Defaults to every
    /// translation in the table.
    #[arg(long, value_delimiter = ',')]
    pub lang: Vec<LanguageCode>,

    /// Exit with non-zero code if any translation is incomplete.
    #[arg(long)]
    pub strict: bool,

    /// Output results as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Run the coverage command.
pub fn run_coverage(args: CoverageArgs) -> Result<i32> {
    let table = load_table(&args.messages)?;

    let languages: Vec<LanguageCode> = if args.lang.is_empty() {
        table
            .languages()
            .filter(|language| !language.is_default())
            .collect()
    } else {
        args.lang.clone()
    };

    let coverage: Vec<Coverage> = languages
        .into_iter()
        .map(|language| table.coverage(language))
        .collect();
    let any_incomplete = coverage.iter().any(|c| !c.is_complete());

    if args.json {
        println!("{}", serde_json::to_string_pretty(&coverage).into_diagnostic()?);
    } else {
        println!("{}", format_coverage_table(&coverage));

        for language_coverage in &coverage {
            if !language_coverage.missing.is_empty() {
                println!("\nMissing in {}:", language_coverage.language);
                for path in &language_coverage.missing {
                    println!("  - {}", path);
                }
            }
        }
    }

    if args.strict && any_incomplete {
        Ok(exitcode::DATAERR)
    } else {
        Ok(exitcode::OK)
    }
}
