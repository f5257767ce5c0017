//! Language-A emitter: a namespaced, annotated C# enum.

use eyre::Result;
use table2enum_codegen::{EmitError, EnumEmitter, language::CSHARP_NAMING};
use table2enum_ir::{EnumEntry, EnumModel};

use crate::{
    CsFile,
    ast::{Attribute, EnumDecl, EnumMember, Namespace, Using},
};

const LANGUAGE: &str = "C#";

/// Emits enums as C# source files.
#[derive(Debug, Clone)]
pub struct CsharpEmitter {
    namespace: String,
    imports: Vec<String>,
}

impl CsharpEmitter {
    pub fn new(namespace: impl Into<String>, imports: Vec<String>) -> Self {
        Self {
            namespace: namespace.into(),
            imports,
        }
    }
}

impl EnumEmitter for CsharpEmitter {
    fn language(&self) -> &'static str {
        "csharp"
    }

    fn file_extension(&self) -> &'static str {
        "cs"
    }

    fn emit(&self, model: &EnumModel) -> Result<String> {
        Ok(emit_csharp(
            &self.namespace,
            &model.name,
            &model.entries,
            &self.imports,
        )?)
    }
}

/// Render `entries` as a `public enum` inside `namespace`, preceded by one
/// `using` directive per import.
///
/// Members with a non-empty description get a `[Description("...")]`
/// attribute. The enum is declared `: long` when an id does not fit in an
/// `int`. Every name is checked against the C# identifier grammar
/// first; nothing is rendered if any check fails.
pub fn emit_csharp<S: AsRef<str>>(
    namespace: &str,
    enum_name: &str,
    entries: &[EnumEntry],
    imports: &[S],
) -> Result<String, EmitError> {
    let usings = imports
        .iter()
        .map(|import| check_using(import.as_ref()))
        .collect::<Result<Vec<_>, _>>()?;
    check_dotted("namespace", namespace)?;
    check_name("enum", enum_name)?;

    let members = entries
        .iter()
        .map(|entry| {
            check_name("enum member", &entry.identifier)?;
            let member = EnumMember::new(&entry.identifier, entry.value);
            Ok(if entry.description.is_empty() {
                member
            } else {
                member.attribute(Attribute::description(&entry.description))
            })
        })
        .collect::<Result<Vec<_>, EmitError>>()?;

    let decl = EnumDecl::new(enum_name).members(members);

    Ok(CsFile::new()
        .usings(usings)
        .add(Namespace::new(namespace).add(decl))
        .render())
}

fn invalid(context: &'static str, name: &str, reason: impl Into<String>) -> EmitError {
    EmitError::InvalidIdentifier {
        language: LANGUAGE,
        context,
        name: name.to_string(),
        reason: reason.into(),
    }
}

fn check_name(context: &'static str, name: &str) -> Result<(), EmitError> {
    match CSHARP_NAMING.validate(name) {
        Some(reason) => Err(invalid(context, name, reason)),
        None => Ok(()),
    }
}

fn check_dotted(context: &'static str, name: &str) -> Result<(), EmitError> {
    for part in name.split('.') {
        if let Some(reason) = CSHARP_NAMING.validate(part) {
            return Err(invalid(context, name, format!("segment '{}': {}", part, reason)));
        }
    }
    Ok(())
}

/// Accepts `A.B`, `static A.B` and `Alias = A.B`.
fn check_using(import: &str) -> Result<Using, EmitError> {
    let import = import.trim();
    let target = import.strip_prefix("static ").unwrap_or(import);

    match target.split_once('=') {
        Some((alias, target)) => {
            check_name("using alias", alias.trim())?;
            check_dotted("using", target.trim())?;
        }
        None => check_dotted("using", target.trim())?,
    }

    Ok(Using::new(import))
}
