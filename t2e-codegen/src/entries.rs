//! Identifier building: rows in, enum entries out.

use table2enum_core::{StopWords, normalize};
use table2enum_ir::{EnumEntry, EnumModel, Row};

/// Derive one [`EnumEntry`] per row, preserving row order.
///
/// No sorting, deduplication or identifier validation happens here; see
/// [`Linter`](crate::Linter) for diagnostics over the result.
pub fn build_entries(rows: &[Row], stop_words: &StopWords) -> Vec<EnumEntry> {
    rows.iter()
        .map(|row| EnumEntry {
            identifier: normalize(&row.description, stop_words),
            value: row.id,
            description: row.description.clone(),
        })
        .collect()
}

/// Build a named [`EnumModel`] from rows.
pub fn build_model(name: &str, rows: &[Row], stop_words: &StopWords) -> EnumModel {
    EnumModel::new(name, build_entries(rows, stop_words))
}
