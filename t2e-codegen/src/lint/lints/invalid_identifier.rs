//! Lint for identifiers no target language accepts.

use table2enum_ir::EnumEntry;

use super::super::{Diagnostic, Lint};
use crate::language::identifier_error;

/// Lint that warns about empty identifiers, identifiers starting with a
/// digit, and identifiers carrying punctuation.
pub struct InvalidIdentifierLint;

impl Lint for InvalidIdentifierLint {
    fn name(&self) -> &'static str {
        "invalid-identifier"
    }

    fn description(&self) -> &'static str {
        "Detect derived identifiers that are not legal enum member names"
    }

    fn check(&self, entries: &[EnumEntry], diagnostics: &mut Vec<Diagnostic>) {
        for (index, entry) in entries.iter().enumerate() {
            if let Some(reason) = identifier_error(&entry.identifier) {
                diagnostics.push(
                    Diagnostic::warning(
                        self.name(),
                        format!(
                            "identifier '{}' derived from '{}' is invalid: {}",
                            entry.identifier, entry.description, reason
                        ),
                    )
                    .at(Diagnostic::row_location(index, entry.value)),
                );
            }
        }
    }
}
