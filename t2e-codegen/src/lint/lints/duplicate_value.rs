//! Lint for repeated row ids.

use std::collections::HashMap;

use table2enum_ir::EnumEntry;

use super::super::{Diagnostic, Lint};

/// Lint that warns when two rows share the same id.
pub struct DuplicateValueLint;

impl Lint for DuplicateValueLint {
    fn name(&self) -> &'static str {
        "duplicate-value"
    }

    fn description(&self) -> &'static str {
        "Detect rows that share the same id"
    }

    fn check(&self, entries: &[EnumEntry], diagnostics: &mut Vec<Diagnostic>) {
        let mut seen: HashMap<i64, &str> = HashMap::new();

        for (index, entry) in entries.iter().enumerate() {
            if let Some(first) = seen.get(&entry.value) {
                diagnostics.push(
                    Diagnostic::warning(
                        self.name(),
                        format!(
                            "value {} of '{}' is already used by '{}'",
                            entry.value, entry.identifier, first
                        ),
                    )
                    .at(Diagnostic::row_location(index, entry.value)),
                );
            } else {
                seen.insert(entry.value, &entry.identifier);
            }
        }
    }
}
