//! TypeScript enum emitter for table2enum.
//!
//! ```
//! use table2enum_codegen_typescript::emit_typescript;
//! use table2enum_ir::EnumEntry;
//!
//! let entries = vec![
//!     EnumEntry::new("SaoPaulo", 1, "Sao Paulo"),
//!     EnumEntry::new("RioJaneiro", 2, "Rio de Janeiro"),
//! ];
//! assert_eq!(
//!     emit_typescript("City", &entries),
//!     "export enum City {\n    saoPaulo = 1,\n    rioJaneiro = 2\n}\n"
//! );
//! ```

mod emitter;

pub mod ast;

pub use ast::{ExportEnum, Member};
pub use emitter::{TypeScriptEmitter, emit_typescript};
pub use table2enum_codegen::EnumEmitter;
