//! Miette diagnostic wrapper for message table errors.
//!
//! Note: This module has an exception for `unused_assignments` because miette
//! derive macros read struct fields in generated code that rustc cannot track.
#![allow(unused_assignments)]

use std::path::Path;

use miette::{Diagnostic, NamedSource, SourceSpan};
use msgtree::DEFAULT_LANGUAGE;
use serde_json::error::Category;
use thiserror::Error;

/// A miette-compatible diagnostic for malformed message tables.
///
/// Note: Fields are read by miette derive macros, not directly by code.
#[derive(Debug, Error, Diagnostic)]
#[error("invalid message table: {message}")]
#[diagnostic(code(msgtree::table))]
pub struct TableDiagnostic {
    #[source_code]
    src: NamedSource<String>,

    #[label("error here")]
    span: SourceSpan,

    message: String,

    #[help]
    help: Option<String>,
}

impl TableDiagnostic {
    /// Create a diagnostic from a serde_json error with source context.
    pub fn from_json_error(path: &Path, content: &str, err: &serde_json::Error) -> Self {
        let offset = byte_offset(content, err.line(), err.column());

        let help = match err.classify() {
            Category::Data if err.to_string().contains("default language") => Some(format!(
                "add a \"{}\" entry holding the default messages",
                DEFAULT_LANGUAGE
            )),
            Category::Data => Some(
                "tables map language codes to objects whose values are strings or objects"
                    .to_string(),
            ),
            Category::Eof => Some("the file ends before the JSON document is complete".to_string()),
            Category::Io | Category::Syntax => None,
        };

        TableDiagnostic {
            src: NamedSource::new(path.display().to_string(), content.to_string()),
            span: (offset, 1).into(),
            message: strip_location(err),
            help,
        }
    }
}

/// Convert a 1-based line and column to a byte offset, clamped to the content.
fn byte_offset(content: &str, line: usize, column: usize) -> usize {
    let offset = content
        .split_inclusive('\n')
        .take(line.saturating_sub(1))
        .map(str::len)
        .sum::<usize>()
        + column.saturating_sub(1);

    // A span starting at the very end would point past the source.
    offset.min(content.len().saturating_sub(1))
}

/// serde_json appends " at line X column Y", which the span already shows.
fn strip_location(err: &serde_json::Error) -> String {
    let message = err.to_string();
    match message.rfind(" at line ") {
        Some(index) => message[..index].to_string(),
        None => message,
    }
}
