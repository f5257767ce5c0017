//! C# attributes, e.g. `[Description("São Paulo")]`.

use std::fmt;

/// A single attribute in its own attribute list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    name: String,
    args: Vec<String>,
}

impl Attribute {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            args: Vec::new(),
        }
    }

    /// `[Description("...")]` from `System.ComponentModel`.
    pub fn description(text: &str) -> Self {
        Self::new("Description").string_arg(text)
    }

    /// Add a positional string argument; the value is escaped.
    pub fn string_arg(mut self, value: &str) -> Self {
        self.args.push(string_literal(value));
        self
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.args.is_empty() {
            write!(f, "[{}]", self.name)
        } else {
            write!(f, "[{}({})]", self.name, self.args.join(", "))
        }
    }
}

/// Quote `value` as a regular C# string literal.
pub fn string_literal(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\0' => out.push_str("\\0"),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}
