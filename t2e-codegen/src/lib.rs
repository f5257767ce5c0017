//! Shared code generation utilities for table2enum.
//!
//! This crate provides language-agnostic abstractions used by the
//! language-specific emitters (`table2enum-codegen-csharp`,
//! `table2enum-codegen-typescript`).
//!
//! # Module Organization
//!
//! - [`builder`] - Code generation building blocks (CodeBuilder, CodeFragment, etc.)
//! - [`entries`] - Turning table rows into enum entries
//! - [`language`] - Emitter trait and naming conventions
//! - [`lint`] - Diagnostics over the derived entries

pub mod builder;
pub mod entries;
pub mod language;
pub mod lint;

mod error;

pub use builder::{CodeBuilder, CodeFragment, Indent, Renderable};
pub use entries::{build_entries, build_model};
pub use error::EmitError;
pub use language::{EnumEmitter, NamingConvention};
pub use lint::{Diagnostic, Linter, Severity};
