//! CLI command implementations.

mod check;
mod coverage;
mod split;
mod translate;

use std::fs::read_to_string;
use std::path::Path;
use std::sync::Arc;

use miette::{miette, IntoDiagnostic, Result};
use msgtree::{LanguageCode, MessageTable, Translator};

use crate::host::HostLocale;
use crate::output::TableDiagnostic;

pub use check::{run_check, CheckArgs};
pub use coverage::{run_coverage, CoverageArgs};
pub use split::{run_split, SplitArgs};
pub use translate::{run_translate, TranslateArgs};

/// Read and parse a JSON message table.
///
/// Parse failures are reported with a span into the file.
fn load_table(path: &Path) -> Result<MessageTable> {
    let content = read_to_string(path)
        .into_diagnostic()
        .map_err(|e| miette!("Cannot read message file {}: {}", path.display(), e))?;

    match serde_json::from_str::<MessageTable>(&content) {
        Ok(table) => {
            tracing::debug!(
                path = %path.display(),
                languages = table.len(),
                "loaded message table"
            );
            Ok(table)
        }
        Err(e) => Err(TableDiagnostic::from_json_error(path, &content, &e).into()),
    }
}

/// Build a translator for `locale`, or for the host language when omitted.
fn translator_for(table: MessageTable, locale: Option<LanguageCode>) -> Translator {
    Translator::builder()
        .table(table)
        .locale_source(Arc::new(HostLocale))
        .maybe_locale(locale)
        .build()
}
