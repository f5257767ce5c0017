//! Diagnostics over derived enum entries.
//!
//! Generation itself is permissive: duplicates and odd identifiers are
//! emitted as derived. Lints report them so callers can warn or refuse.

mod diagnostic;
mod lints;

pub use diagnostic::{Diagnostic, Severity};
pub use lints::{
    DuplicateIdentifierLint, DuplicateValueLint, EmptyDescriptionLint, InvalidIdentifierLint,
};
use table2enum_ir::EnumEntry;

/// A lint that checks enum entries for issues.
pub trait Lint: Send + Sync {
    /// The name of this lint.
    fn name(&self) -> &'static str;

    /// Short description of what the lint detects.
    fn description(&self) -> &'static str;

    /// Check the entries and add any diagnostics.
    fn check(&self, entries: &[EnumEntry], diagnostics: &mut Vec<Diagnostic>);
}

/// Runs a set of lints over enum entries.
pub struct Linter {
    lints: Vec<Box<dyn Lint>>,
}

impl Linter {
    /// Create a linter with all built-in lints.
    pub fn new() -> Self {
        Self {
            lints: vec![
                Box::new(EmptyDescriptionLint),
                Box::new(InvalidIdentifierLint),
                Box::new(DuplicateIdentifierLint),
                Box::new(DuplicateValueLint),
            ],
        }
    }

    /// Create a linter without any lints.
    pub fn empty() -> Self {
        Self { lints: Vec::new() }
    }

    /// Add a lint.
    pub fn with(mut self, lint: impl Lint + 'static) -> Self {
        self.lints.push(Box::new(lint));
        self
    }

    /// The registered lints, in run order.
    pub fn lints(&self) -> impl Iterator<Item = &dyn Lint> {
        self.lints.iter().map(|l| l.as_ref())
    }

    /// Run every lint and collect diagnostics in lint order.
    pub fn run(&self, entries: &[EnumEntry]) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        for lint in &self.lints {
            lint.check(entries, &mut diagnostics);
        }
        diagnostics
    }
}

impl Default for Linter {
    fn default() -> Self {
        Self::new()
    }
}
