//! Check operation - derive identifiers and lint them.

use eyre::{Context, Result};
use table2enum_codegen::build_entries;
use table2enum_core::StopWords;
use table2enum_manifest::SourceSettings;
use table2enum_source::{RowSource, TableQuery};
use tracing::info;

use super::lint;
use crate::reports::CheckReport;

/// Execute the check operation.
///
/// Reads the table and reports the entries a `generate` run would emit,
/// together with lint diagnostics. Nothing is written.
pub fn check(
    settings: &SourceSettings,
    black_words: &[String],
    source: &mut dyn RowSource,
    strict: bool,
) -> Result<CheckReport> {
    let query = TableQuery::from(settings);
    let rows = source
        .fetch_rows(&query)
        .wrap_err_with(|| format!("Failed to read table '{}'", query.table))?;
    info!(table = %query.table, rows = rows.len(), "fetched rows");

    let entries = build_entries(&rows, &StopWords::with_additional(black_words));
    let diagnostics = lint(&entries, strict);

    Ok(CheckReport {
        table: query.table,
        entries,
        diagnostics,
    })
}
