//! Implementation of the `msgtree t` command.

use std::path::PathBuf;

use miette::IntoDiagnostic;
use msgtree::{LanguageCode, Params, Value};
use owo_colors::OwoColorize;
use serde::Serialize;

use super::{load_table, translator_for};

/// Arguments for the t command.
#[derive(Debug, clap::Args)]
pub struct TranslateArgs {
    /// JSON message table keyed by language code
    #[arg(short, long, required = true)]
    pub messages: PathBuf,

    /// Language to translate into (defaults to the system language)
    #[arg(short, long, env = "MSGTREE_LOCALE")]
    pub locale: Option<LanguageCode>,

    /// Dot-separated message key (e.g., greeting.hello)
    pub key: String,

    /// Parameters in name=value format (repeatable)
    #[arg(short = 'p', long = "param", value_parser = parse_key_val)]
    pub params: Vec<(String, String)>,

    /// Exit with non-zero code if the key has no message text
    #[arg(long)]
    pub strict: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for t results.
#[derive(Serialize)]
struct TranslateResult<'a> {
    key: &'a str,
    locale: LanguageCode,
    resolved_locale: LanguageCode,
    found: bool,
    result: String,
}

/// Parse a key=value parameter string.
pub(super) fn parse_key_val(s: &str) -> Result<(String, String), String> {
    let (name, value) = s
        .split_once('=')
        .ok_or_else(|| format!("invalid parameter format '{}': expected name=value", s))?;
    Ok((name.to_string(), value.to_string()))
}

/// Integers become numbers, anything else stays a string.
fn to_params(pairs: Vec<(String, String)>) -> Params {
    pairs
        .into_iter()
        .map(|(name, raw)| {
            let value = match raw.parse::<i64>() {
                Ok(n) => Value::from(n),
                Err(_) => Value::from(raw),
            };
            (name, value)
        })
        .collect()
}

/// Run the t command.
pub fn run_translate(args: TranslateArgs) -> miette::Result<i32> {
    let table = load_table(&args.messages)?;
    let translator = translator_for(table, args.locale);

    let found = translator.lookup(&args.key).is_ok();
    let result = translator.t_with(&args.key, &to_params(args.params));

    if args.json {
        let output = TranslateResult {
            key: &args.key,
            locale: translator.locale(),
            resolved_locale: translator.resolved_locale(),
            found,
            result,
        };
        println!("{}", serde_json::to_string_pretty(&output).into_diagnostic()?);
    } else {
        println!("{}", result);
        if !found {
            eprintln!(
                "{} no message for '{}' in '{}'",
                "warning:".yellow().bold(),
                args.key,
                translator.resolved_locale()
            );
        }
    }

    if args.strict && !found {
        Ok(exitcode::DATAERR)
    } else {
        Ok(exitcode::OK)
    }
}
