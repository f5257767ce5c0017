//! Lint for identifiers derived more than once.

use std::collections::HashMap;

use table2enum_ir::EnumEntry;

use super::super::{Diagnostic, Lint};

/// Lint that warns when two rows normalize to the same identifier.
pub struct DuplicateIdentifierLint;

impl Lint for DuplicateIdentifierLint {
    fn name(&self) -> &'static str {
        "duplicate-identifier"
    }

    fn description(&self) -> &'static str {
        "Detect descriptions that normalize to the same identifier"
    }

    fn check(&self, entries: &[EnumEntry], diagnostics: &mut Vec<Diagnostic>) {
        let mut seen: HashMap<&str, &EnumEntry> = HashMap::new();

        for (index, entry) in entries.iter().enumerate() {
            if let Some(first) = seen.get(entry.identifier.as_str()) {
                diagnostics.push(
                    Diagnostic::warning(
                        self.name(),
                        format!(
                            "identifier '{}' from '{}' duplicates the one derived from '{}' (id {})",
                            entry.identifier, entry.description, first.description, first.value
                        ),
                    )
                    .at(Diagnostic::row_location(index, entry.value)),
                );
            } else {
                seen.insert(&entry.identifier, entry);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_identifier() {
        let entries = vec![
            EnumEntry::new("SaoPaulo", 1, "Sao Paulo"),
            EnumEntry::new("Rio", 2, "Rio"),
            EnumEntry::new("SaoPaulo", 3, "São Paulo"),
        ];

        let mut diagnostics = Vec::new();
        DuplicateIdentifierLint.check(&entries, &mut diagnostics);

        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].severity.is_warning());
        assert!(diagnostics[0].message.contains("'SaoPaulo'"));
        assert!(diagnostics[0].message.contains("(id 1)"));
        assert_eq!(diagnostics[0].location.as_deref(), Some("row 3 (id 3)"));
    }

    #[test]
    fn test_case_differs_is_not_duplicate() {
        let entries = vec![
            EnumEntry::new("Abc", 1, "abc"),
            EnumEntry::new("ABc", 2, "a bc"),
        ];

        let mut diagnostics = Vec::new();
        DuplicateIdentifierLint.check(&entries, &mut diagnostics);

        assert!(diagnostics.is_empty());
    }
}
