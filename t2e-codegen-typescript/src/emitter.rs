//! Language-B emitter: an exported TypeScript enum.

use eyre::Result;
use table2enum_codegen::{EnumEmitter, language::TYPESCRIPT_NAMING};
use table2enum_ir::{EnumEntry, EnumModel};

use crate::ast::{ExportEnum, Member};

/// Emits enums as TypeScript modules.
#[derive(Debug, Clone, Copy, Default)]
pub struct TypeScriptEmitter;

impl EnumEmitter for TypeScriptEmitter {
    fn language(&self) -> &'static str {
        "typescript"
    }

    fn file_extension(&self) -> &'static str {
        "ts"
    }

    fn emit(&self, model: &EnumModel) -> Result<String> {
        Ok(emit_typescript(&model.name, &model.entries))
    }
}

/// Render `entries` as `export enum <enum_name>` with camelCase members.
///
/// Identifiers are emitted as derived; no validation takes place.
pub fn emit_typescript(enum_name: &str, entries: &[EnumEntry]) -> String {
    let members = entries.iter().map(|entry| {
        Member::new(
            TYPESCRIPT_NAMING.member_name(&entry.identifier),
            entry.value,
        )
    });

    ExportEnum::new(enum_name).members(members).build()
}
