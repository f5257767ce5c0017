//! Turns fragments into indented text.

use super::{CodeFragment, Indent, Renderable};

/// Accumulates rendered code.
///
/// ```
/// use table2enum_codegen::{CodeBuilder, CodeFragment};
///
/// let mut builder = CodeBuilder::csharp();
/// builder
///     .push_line("using System;")
///     .push_blank()
///     .push_fragment(CodeFragment::braced("public enum City", Vec::new()));
///
/// assert_eq!(builder.build(), "using System;\n\npublic enum City\n{\n}\n");
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    depth: usize,
    indent: Indent,
    buffer: String,
}

impl CodeBuilder {
    pub fn new(indent: Indent) -> Self {
        Self {
            depth: 0,
            indent,
            buffer: String::new(),
        }
    }

    pub fn csharp() -> Self {
        Self::new(Indent::CSHARP)
    }

    pub fn typescript() -> Self {
        Self::new(Indent::TYPESCRIPT)
    }

    /// Append `s` at the current depth, followed by a newline.
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        self.indent.write(&mut self.buffer, self.depth);
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    /// Render a syntax node at the current depth.
    pub fn emit(&mut self, node: &impl Renderable) -> &mut Self {
        for fragment in node.to_fragments() {
            self.push_fragment(fragment);
        }
        self
    }

    pub fn push_fragment(&mut self, fragment: CodeFragment) -> &mut Self {
        match fragment {
            CodeFragment::Line(s) => {
                self.push_line(&s);
            }
            CodeFragment::Blank => {
                self.push_blank();
            }
            CodeFragment::Block {
                header,
                body,
                close,
            } => {
                self.push_line(&header);
                self.depth += 1;
                for f in body {
                    self.push_fragment(f);
                }
                self.depth -= 1;
                if let Some(c) = close {
                    self.push_line(&c);
                }
            }
            CodeFragment::Sequence(fragments) => {
                for f in fragments {
                    self.push_fragment(f);
                }
            }
        }
        self
    }

    pub fn build(self) -> String {
        self.buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_line_has_no_indent() {
        let mut builder = CodeBuilder::csharp();
        builder.push_fragment(CodeFragment::block(
            "{",
            vec![
                CodeFragment::Line("A = 1,".to_string()),
                CodeFragment::Blank,
                CodeFragment::Line("B = 2".to_string()),
            ],
            Some("}".to_string()),
        ));

        assert_eq!(builder.build(), "{\n    A = 1,\n\n    B = 2\n}\n");
    }

    #[test]
    fn test_block_without_close() {
        let mut builder = CodeBuilder::typescript();
        builder.push_fragment(CodeFragment::block(
            "export enum City {",
            vec![CodeFragment::Line("a = 1".to_string())],
            None,
        ));
        assert_eq!(builder.build(), "export enum City {\n    a = 1\n");
    }

    #[test]
    fn test_emit_nested_braced_nodes() {
        struct NamespaceNode;
        impl Renderable for NamespaceNode {
            fn to_fragments(&self) -> Vec<CodeFragment> {
                vec![CodeFragment::braced(
                    "namespace Acme",
                    vec![CodeFragment::braced("public enum City", Vec::new())],
                )]
            }
        }

        let mut builder = CodeBuilder::csharp();
        builder.emit(&NamespaceNode);
        assert_eq!(
            builder.build(),
            "namespace Acme\n{\n    public enum City\n    {\n    }\n}\n"
        );
    }

    #[test]
    fn test_tab_indent() {
        let mut builder = CodeBuilder::new(Indent::Tab);
        builder.push_fragment(CodeFragment::braced(
            "class A",
            vec![CodeFragment::Line("x".to_string())],
        ));
        assert_eq!(builder.build(), "class A\n{\n\tx\n}\n");
    }
}
