//! Indentation unit for generated code.

/// One level of indentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    Spaces(u8),
    Tab,
}

impl Indent {
    pub const CSHARP: Self = Self::Spaces(4);
    pub const TYPESCRIPT: Self = Self::Spaces(4);

    /// Append `levels` units to `buf`.
    pub fn write(&self, buf: &mut String, levels: usize) {
        match *self {
            Self::Spaces(width) => buf.extend(std::iter::repeat_n(' ', levels * width as usize)),
            Self::Tab => buf.extend(std::iter::repeat_n('\t', levels)),
        }
    }
}
