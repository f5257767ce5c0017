//! C# enum emitter for table2enum.
//!
//! Builds a small C# syntax tree (`using` directives, a namespace, a public
//! enum with `[Description]` attributes) and renders it directly, so the
//! output is well-formed without a parse-and-reformat pass.
//!
//! ```
//! use table2enum_codegen_csharp::emit_csharp;
//! use table2enum_ir::EnumEntry;
//!
//! let entries = vec![EnumEntry::new("SaoPaulo", 1, "São Paulo")];
//! let code = emit_csharp("Acme", "City", &entries, &["System.ComponentModel"]).unwrap();
//! assert!(code.contains("[Description(\"São Paulo\")]"));
//! ```

mod cs_file;
mod emitter;

pub mod ast;

pub use cs_file::CsFile;
pub use emitter::{CsharpEmitter, emit_csharp};
pub use table2enum_codegen::{EmitError, EnumEmitter};
