//! Syntax nodes describe themselves as [`CodeFragment`]s;
//! [`CodeBuilder`](super::CodeBuilder) owns indentation and turns fragments
//! into text.

/// A piece of generated code.
#[derive(Debug, Clone, PartialEq)]
pub enum CodeFragment {
    /// A single line; the builder adds indentation and the newline.
    Line(String),
    /// An empty line, never indented.
    Blank,
    /// `header`, then `body` one level deeper, then `close` if any.
    Block {
        header: String,
        body: Vec<CodeFragment>,
        close: Option<String>,
    },
    Sequence(Vec<CodeFragment>),
}

impl CodeFragment {
    pub fn block(
        header: impl Into<String>,
        body: Vec<CodeFragment>,
        close: Option<String>,
    ) -> Self {
        Self::Block {
            header: header.into(),
            body,
            close,
        }
    }

    /// A block with braces on their own lines, C# style:
    ///
    /// ```text
    /// header
    /// {
    ///     body
    /// }
    /// ```
    pub fn braced(header: impl Into<String>, body: Vec<CodeFragment>) -> Self {
        Self::Sequence(vec![
            Self::Line(header.into()),
            Self::block("{", body, Some("}".to_string())),
        ])
    }
}

/// A syntax node that can be rendered.
pub trait Renderable {
    fn to_fragments(&self) -> Vec<CodeFragment>;
}

impl<T: Renderable + ?Sized> Renderable for &T {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        (*self).to_fragments()
    }
}

impl<T: Renderable + ?Sized> Renderable for Box<T> {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        self.as_ref().to_fragments()
    }
}
