//! Implementation of the `msgtree split` command.

use std::path::PathBuf;

use miette::IntoDiagnostic;
use msgtree::{LanguageCode, DEFAULT_PLACEHOLDER};
use owo_colors::OwoColorize;
use serde::Serialize;

use super::{load_table, translator_for};

/// Arguments for the split command.
#[derive(Debug, clap::Args)]
pub struct SplitArgs {
    /// JSON message table keyed by language code
    #[arg(short, long, required = true)]
    pub messages: PathBuf,

    /// Language to translate into (defaults to the system language)
    #[arg(short, long, env = "MSGTREE_LOCALE")]
    pub locale: Option<LanguageCode>,

    /// Dot-separated message key
    pub key: String,

    /// Placeholder to split on
    #[arg(long, default_value = DEFAULT_PLACEHOLDER)]
    pub placeholder: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for split results.
#[derive(Serialize)]
struct SplitResult {
    before: String,
    after: String,
}

/// Run the split command.
pub fn run_split(args: SplitArgs) -> miette::Result<i32> {
    let table = load_table(&args.messages)?;
    let translator = translator_for(table, args.locale);

    let (before, after) = translator.placeholder_tuple_with(&args.key, &args.placeholder);

    if args.json {
        let output = SplitResult { before, after };
        println!("{}", serde_json::to_string_pretty(&output).into_diagnostic()?);
    } else {
        println!("{} {:?}", "before:".dimmed(), before);
        println!("{} {:?}", "after: ".dimmed(), after);
    }

    Ok(exitcode::OK)
}
