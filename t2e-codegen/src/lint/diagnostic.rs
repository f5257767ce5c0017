//! Diagnostic types produced by lints.

use serde::Serialize;

/// Severity level for a diagnostic message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// A fatal error that prevents generation.
    Error,
    /// A warning that doesn't prevent generation but should be addressed.
    Warning,
}

impl Severity {
    /// Returns true if this is an error severity.
    pub fn is_error(&self) -> bool {
        matches!(self, Severity::Error)
    }

    /// Returns true if this is a warning severity.
    pub fn is_warning(&self) -> bool {
        matches!(self, Severity::Warning)
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// A diagnostic message from a lint.
#[derive(Debug, Clone, Serialize)]
pub struct Diagnostic {
    /// The severity level of this diagnostic.
    pub severity: Severity,
    /// The lint that produced this diagnostic.
    pub lint: String,
    /// The diagnostic message.
    pub message: String,
    /// Optional location in the source table (e.g., "row 3 (id 42)").
    pub location: Option<String>,
}

impl Diagnostic {
    /// Create a new error diagnostic.
    pub fn error(lint: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Error, lint, message)
    }

    /// Create a new warning diagnostic.
    pub fn warning(lint: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, lint, message)
    }

    fn new(severity: Severity, lint: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity,
            lint: lint.into(),
            message: message.into(),
            location: None,
        }
    }

    /// Add a location to this diagnostic.
    pub fn at(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Promote this diagnostic to an error.
    pub fn escalate(mut self) -> Self {
        self.severity = Severity::Error;
        self
    }

    /// Location string for the row at `index` (0-based) with the given id.
    pub fn row_location(index: usize, id: i64) -> String {
        format!("row {} (id {})", index + 1, id)
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.severity, self.message)?;
        if let Some(loc) = &self.location {
            write!(f, " (at {})", loc)?;
        }
        Ok(())
    }
}
