//! Check command report data structures.

use serde::Serialize;
use table2enum_codegen::Diagnostic;
use table2enum_ir::EnumEntry;

use super::output::{Output, Report};

/// Report data from a check run.
#[derive(Debug, Serialize)]
pub struct CheckReport {
    pub table: String,
    /// Derived entries, in row order.
    pub entries: Vec<EnumEntry>,
    pub diagnostics: Vec<Diagnostic>,
}

impl CheckReport {
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_error())
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        out.key_value("Table", &self.table);
        out.section(&format!("Entries ({})", self.entries.len()));
        for entry in &self.entries {
            let identifier = if entry.identifier.is_empty() {
                "<empty>"
            } else {
                entry.identifier.as_str()
            };
            out.list_item(&format!(
                "{} = {}  \"{}\"",
                identifier, entry.value, entry.description
            ));
        }
        out.newline();

        for diag in &self.diagnostics {
            out.diagnostic(&diag.to_string());
        }

        if self.diagnostics.is_empty() {
            out.preformatted(&format!("✓ {} has no problems", self.table));
        }
    }
}
