//! Naming conventions for the target languages.

use table2enum_core::to_camel_case;

/// Language-specific naming conventions.
///
/// Defines how a normalized identifier becomes an enum member name and which
/// words the language reserves.
#[derive(Debug, Clone, Copy)]
pub struct NamingConvention {
    /// Transform a PascalCase identifier into a member name (e.g., "SaoPaulo" -> "saoPaulo")
    pub identifier_to_member: fn(&str) -> String,
    /// List of reserved words in the language
    pub reserved_words: &'static [&'static str],
}

impl NamingConvention {
    /// Check if a name is a reserved word.
    pub fn is_reserved(&self, name: &str) -> bool {
        self.reserved_words.contains(&name)
    }

    /// Member name for a normalized identifier.
    pub fn member_name(&self, identifier: &str) -> String {
        (self.identifier_to_member)(identifier)
    }

    /// Why `name` cannot be used as an identifier in this language, if it can't.
    pub fn validate(&self, name: &str) -> Option<&'static str> {
        if self.is_reserved(name) {
            return Some("name is a reserved keyword");
        }
        identifier_error(name)
    }
}

/// Why `name` is not a plain identifier (letter or underscore first, then
/// letters, digits or underscores), if it isn't.
pub fn identifier_error(name: &str) -> Option<&'static str> {
    let mut chars = name.chars();

    match chars.next() {
        None => return Some("name cannot be empty"),
        Some(c) if c.is_alphabetic() || c == '_' => {}
        Some(c) if c.is_numeric() => return Some("name must not start with a digit"),
        Some(_) => return Some("name must start with a letter or underscore"),
    }

    if chars.any(|c| !(c.is_alphanumeric() || c == '_')) {
        return Some("name may only contain letters, digits and underscores");
    }

    None
}

fn keep(identifier: &str) -> String {
    identifier.to_string()
}

/// C# naming conventions: members stay PascalCase.
pub const CSHARP_NAMING: NamingConvention = NamingConvention {
    identifier_to_member: keep,
    reserved_words: &[
        "abstract",
        "as",
        "base",
        "bool",
        "break",
        "byte",
        "case",
        "catch",
        "char",
        "checked",
        "class",
        "const",
        "continue",
        "decimal",
        "default",
        "delegate",
        "do",
        "double",
        "else",
        "enum",
        "event",
        "explicit",
        "extern",
        "false",
        "finally",
        "fixed",
        "float",
        "for",
        "foreach",
        "goto",
        "if",
        "implicit",
        "in",
        "int",
        "interface",
        "internal",
        "is",
        "lock",
        "long",
        "namespace",
        "new",
        "null",
        "object",
        "operator",
        "out",
        "override",
        "params",
        "private",
        "protected",
        "public",
        "readonly",
        "ref",
        "return",
        "sbyte",
        "sealed",
        "short",
        "sizeof",
        "stackalloc",
        "static",
        "string",
        "struct",
        "switch",
        "this",
        "throw",
        "true",
        "try",
        "typeof",
        "uint",
        "ulong",
        "unchecked",
        "unsafe",
        "ushort",
        "using",
        "virtual",
        "void",
        "volatile",
        "while",
    ],
};

/// TypeScript naming conventions: members are camelCase.
pub const TYPESCRIPT_NAMING: NamingConvention = NamingConvention {
    identifier_to_member: to_camel_case,
    reserved_words: &[
        "break",
        "case",
        "catch",
        "class",
        "const",
        "continue",
        "debugger",
        "default",
        "delete",
        "do",
        "else",
        "enum",
        "export",
        "extends",
        "false",
        "finally",
        "for",
        "function",
        "if",
        "import",
        "in",
        "instanceof",
        "new",
        "null",
        "return",
        "super",
        "switch",
        "this",
        "throw",
        "true",
        "try",
        "typeof",
        "var",
        "void",
        "while",
        "with",
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_member_names() {
        assert_eq!(CSHARP_NAMING.member_name("SaoPaulo"), "SaoPaulo");
        assert_eq!(TYPESCRIPT_NAMING.member_name("SaoPaulo"), "saoPaulo");
    }

    #[test]
    fn test_reserved_words() {
        assert!(CSHARP_NAMING.is_reserved("namespace"));
        assert!(!CSHARP_NAMING.is_reserved("Namespace"));
        assert!(TYPESCRIPT_NAMING.is_reserved("enum"));
    }

    #[test]
    fn test_identifier_error() {
        assert_eq!(identifier_error("SaoPaulo"), None);
        assert_eq!(identifier_error("_Hidden"), None);
        assert_eq!(identifier_error("Área51"), None);
        assert_eq!(identifier_error(""), Some("name cannot be empty"));
        assert_eq!(
            identifier_error("1stFloor"),
            Some("name must not start with a digit")
        );
        assert_eq!(
            identifier_error("(eu)"),
            Some("name must start with a letter or underscore")
        );
        assert_eq!(
            identifier_error("Sales(eu)"),
            Some("name may only contain letters, digits and underscores")
        );
    }

    #[test]
    fn test_validate_checks_keywords_first() {
        assert_eq!(
            CSHARP_NAMING.validate("class"),
            Some("name is a reserved keyword")
        );
        assert_eq!(CSHARP_NAMING.validate("City"), None);
    }
}
