//! Enum members and the enum they belong to.

use serde::Serialize;

/// A single enum member derived from a [`Row`](crate::Row).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnumEntry {
    /// PascalCase identifier produced by the normalizer.
    pub identifier: String,
    /// The row id, emitted as the member value.
    pub value: i64,
    /// The original, untouched description text.
    pub description: String,
}

impl EnumEntry {
    pub fn new(identifier: impl Into<String>, value: i64, description: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            value,
            description: description.into(),
        }
    }
}

/// A named enumeration ready to be emitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnumModel {
    pub name: String,
    pub entries: Vec<EnumEntry>,
}

impl EnumModel {
    pub fn new(name: impl Into<String>, entries: Vec<EnumEntry>) -> Self {
        Self {
            name: name.into(),
            entries,
        }
    }

    /// Returns true if the enum has no members.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
