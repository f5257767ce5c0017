//! `using` directives and namespace blocks.

use table2enum_codegen::{CodeFragment, Renderable};

/// A `using` directive, e.g. `using System.ComponentModel;`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Using {
    target: String,
}

impl Using {
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
        }
    }
}

impl Renderable for Using {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::Line(format!("using {};", self.target))]
    }
}

/// A block-scoped namespace declaration.
#[derive(Debug, Clone, Default)]
pub struct Namespace {
    name: String,
    members: Vec<Vec<CodeFragment>>,
}

impl Namespace {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            members: Vec::new(),
        }
    }

    /// Add a type declaration to the namespace.
    #[allow(clippy::should_implement_trait)]
    pub fn add<R: Renderable>(mut self, node: R) -> Self {
        self.members.push(node.to_fragments());
        self
    }
}

impl Renderable for Namespace {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut body = Vec::new();
        for (i, member) in self.members.iter().enumerate() {
            if i > 0 {
                body.push(CodeFragment::Blank);
            }
            body.extend(member.iter().cloned());
        }

        vec![CodeFragment::braced(format!("namespace {}", self.name), body)]
    }
}

#[cfg(test)]
mod tests {
    use table2enum_codegen::CodeBuilder;

    use super::*;
    use crate::ast::EnumDecl;

    #[test]
    fn test_using() {
        let mut builder = CodeBuilder::csharp();
        builder.emit(&Using::new("System.ComponentModel"));
        assert_eq!(builder.build(), "using System.ComponentModel;\n");
    }

    #[test]
    fn test_namespace_wraps_members() {
        let ns = Namespace::new("Acme.Domain")
            .add(EnumDecl::new("A"))
            .add(EnumDecl::new("B"));

        let mut builder = CodeBuilder::csharp();
        builder.emit(&ns);
        assert_eq!(
            builder.build(),
            "namespace Acme.Domain\n{\n    public enum A\n    {\n    }\n\n    public enum B\n    {\n    }\n}\n"
        );
    }
}
