//! C# enum declarations.

use table2enum_codegen::{CodeFragment, Renderable};

use super::Attribute;

/// A member of a C# enum, e.g. `SaoPaulo = 1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumMember {
    pub name: String,
    pub value: i64,
    pub attributes: Vec<Attribute>,
}

impl EnumMember {
    pub fn new(name: impl Into<String>, value: i64) -> Self {
        Self {
            name: name.into(),
            value,
            attributes: Vec::new(),
        }
    }

    pub fn attribute(mut self, attribute: Attribute) -> Self {
        self.attributes.push(attribute);
        self
    }

    fn fragments(&self, last: bool) -> Vec<CodeFragment> {
        let mut fragments: Vec<CodeFragment> = self
            .attributes
            .iter()
            .map(|attr| CodeFragment::Line(attr.to_string()))
            .collect();

        let separator = if last { "" } else { "," };
        fragments.push(CodeFragment::Line(format!(
            "{} = {}{}",
            self.name, self.value, separator
        )));

        if !last {
            fragments.push(CodeFragment::Blank);
        }
        fragments
    }
}

/// Builder for a `public enum` declaration.
///
/// The enum is `int`-backed unless a member value does not fit in 32 bits,
/// in which case it is declared `: long`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumDecl {
    name: String,
    members: Vec<EnumMember>,
}

impl EnumDecl {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            members: Vec::new(),
        }
    }

    pub fn member(mut self, member: EnumMember) -> Self {
        self.members.push(member);
        self
    }

    pub fn members(mut self, members: impl IntoIterator<Item = EnumMember>) -> Self {
        self.members.extend(members);
        self
    }

    fn needs_long(&self) -> bool {
        self.members
            .iter()
            .any(|m| i32::try_from(m.value).is_err())
    }
}

impl Renderable for EnumDecl {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let count = self.members.len();
        let body = self
            .members
            .iter()
            .enumerate()
            .flat_map(|(i, member)| member.fragments(i + 1 == count))
            .collect();

        let header = if self.needs_long() {
            format!("public enum {} : long", self.name)
        } else {
            format!("public enum {}", self.name)
        };
        vec![CodeFragment::braced(header, body)]
    }
}
