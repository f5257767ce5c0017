//! Core operations.
//!
//! The work behind each command, separated from argument parsing and
//! output rendering. Operations read rows through a [`RowSource`] so they
//! run the same against a database or fixed rows.
//!
//! [`RowSource`]: table2enum_source::RowSource

pub mod check;
pub mod generate;

pub use check::check;
pub use generate::{GenerateOptions, generate};
use table2enum_codegen::{Diagnostic, Linter};
use table2enum_ir::EnumEntry;

/// Run the built-in lints; with `strict`, every finding is an error.
fn lint(entries: &[EnumEntry], strict: bool) -> Vec<Diagnostic> {
    let diagnostics = Linter::new().run(entries);
    if strict {
        diagnostics.into_iter().map(Diagnostic::escalate).collect()
    } else {
        diagnostics
    }
}
