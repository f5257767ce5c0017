//! Lint for rows without a description.

use table2enum_ir::EnumEntry;

use super::super::{Diagnostic, Lint};

/// Lint that warns about rows whose description is empty or blank.
///
/// Such rows normalize to an empty identifier and get no `[Description]`
/// attribute in C#.
pub struct EmptyDescriptionLint;

impl Lint for EmptyDescriptionLint {
    fn name(&self) -> &'static str {
        "empty-description"
    }

    fn description(&self) -> &'static str {
        "Detect rows with an empty or whitespace-only description"
    }

    fn check(&self, entries: &[EnumEntry], diagnostics: &mut Vec<Diagnostic>) {
        for (index, entry) in entries.iter().enumerate() {
            if entry.description.trim().is_empty() {
                diagnostics.push(
                    Diagnostic::warning(
                        self.name(),
                        format!("value {} has no description", entry.value),
                    )
                    .at(Diagnostic::row_location(index, entry.value)),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_descriptions() {
        let entries = vec![
            EnumEntry::new("", 1, ""),
            EnumEntry::new("Ok", 2, "ok"),
            EnumEntry::new("   ", 3, "   "),
        ];

        let mut diagnostics = Vec::new();
        EmptyDescriptionLint.check(&entries, &mut diagnostics);

        assert_eq!(diagnostics.len(), 2);
        assert_eq!(diagnostics[0].message, "value 1 has no description");
        assert_eq!(diagnostics[1].location.as_deref(), Some("row 3 (id 3)"));
    }
}
