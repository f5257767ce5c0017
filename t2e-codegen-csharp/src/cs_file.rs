//! CsFile abstraction for a whole C# compilation unit.

use table2enum_codegen::{CodeBuilder, CodeFragment, Indent, Renderable};

use crate::ast::Using;

/// A structured representation of a C# file: `using` directives followed by
/// body declarations.
///
/// # Example
///
/// ```
/// use table2enum_codegen_csharp::{CsFile, ast::{EnumDecl, Namespace, Using}};
///
/// let code = CsFile::new()
///     .using(Using::new("System"))
///     .add(Namespace::new("Acme").add(EnumDecl::new("City")))
///     .render();
/// assert!(code.starts_with("using System;\n\nnamespace Acme\n{\n"));
/// ```
#[derive(Default)]
pub struct CsFile {
    usings: Vec<Using>,
    body: Vec<Vec<CodeFragment>>,
}

impl CsFile {
    /// Create a new empty CsFile.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a using directive.
    pub fn using(mut self, using: Using) -> Self {
        self.usings.push(using);
        self
    }

    /// Add multiple using directives.
    pub fn usings(mut self, usings: impl IntoIterator<Item = Using>) -> Self {
        self.usings.extend(usings);
        self
    }

    /// Add a body element (any Renderable).
    #[allow(clippy::should_implement_trait)]
    pub fn add<R: Renderable>(mut self, node: R) -> Self {
        self.body.push(node.to_fragments());
        self
    }

    /// Render the file with C# indentation (4 spaces).
    pub fn render(&self) -> String {
        self.render_with_indent(Indent::CSHARP)
    }

    /// Render the file with custom indentation.
    pub fn render_with_indent(&self, indent: Indent) -> String {
        let mut builder = CodeBuilder::new(indent);

        for using in &self.usings {
            builder.emit(using);
        }

        if !self.usings.is_empty() && !self.body.is_empty() {
            builder.push_blank();
        }

        for (i, fragments) in self.body.iter().enumerate() {
            if i > 0 {
                builder.push_blank();
            }
            for fragment in fragments {
                builder.push_fragment(fragment.clone());
            }
        }

        builder.build()
    }

    /// Check if the file is empty.
    pub fn is_empty(&self) -> bool {
        self.usings.is_empty() && self.body.is_empty()
    }
}
