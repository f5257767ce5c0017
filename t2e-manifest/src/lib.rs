//! Configuration for table2enum.
//!
//! Options come from two places: an optional `table2enum.toml` file and the
//! command line. Both are represented as a [`Manifest`] whose fields are all
//! optional; [`Manifest::merge`] layers the command line over the file and
//! [`Manifest::validate`] turns the result into typed [`Settings`].

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod manifest;
mod settings;

pub use error::{Error, Result};
pub use manifest::{
    CsharpSection, DEFAULT_FILE_NAME, EnumSection, Manifest, SourceSection, TypeScriptSection,
};
pub use settings::{ConnectionSource, CsharpTarget, Settings, SourceSettings, TypeScriptTarget};
