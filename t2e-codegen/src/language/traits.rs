//! Language-agnostic emitter trait.

use eyre::Result;
use table2enum_ir::EnumModel;

/// Trait for language-specific enum emitters.
///
/// Implement this trait to add support for emitting enums in a new language.
pub trait EnumEmitter {
    /// Language identifier (e.g., "csharp", "typescript")
    fn language(&self) -> &'static str;

    /// File extension for generated source files (e.g., "cs", "ts")
    fn file_extension(&self) -> &'static str;

    /// Render the enum as the complete content of one source file.
    fn emit(&self, model: &EnumModel) -> Result<String>;
}
