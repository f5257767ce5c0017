//! Core utilities and types for table2enum.
//!
//! This crate provides the text normalization rules that turn database
//! descriptions into identifiers, plus the file sink used to write
//! generated sources.

mod file;
mod normalize;
mod utils;

// File operations
pub use file::File;
// Identifier normalization
pub use normalize::{BUILTIN_STOP_WORDS, StopWords, normalize, remove_diacritics};
// String utilities
pub use utils::{to_camel_case, to_pascal_case, to_underscore};
