//! TypeScript `export enum` builder.

use table2enum_codegen::{CodeBuilder, CodeFragment, Renderable};

/// A numeric enum member, e.g. `saoPaulo = 1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    pub name: String,
    pub value: i64,
}

impl Member {
    pub fn new(name: impl Into<String>, value: i64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// Builder for `export enum Name { ... }`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportEnum {
    name: String,
    members: Vec<Member>,
}

impl ExportEnum {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            members: Vec::new(),
        }
    }

    pub fn member(mut self, member: Member) -> Self {
        self.members.push(member);
        self
    }

    pub fn members(mut self, members: impl IntoIterator<Item = Member>) -> Self {
        self.members.extend(members);
        self
    }

    /// Build the enum as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::typescript();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for ExportEnum {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let count = self.members.len();
        let body = self
            .members
            .iter()
            .enumerate()
            .map(|(i, member)| {
                let separator = if i + 1 == count { "" } else { "," };
                CodeFragment::Line(format!("{} = {}{}", member.name, member.value, separator))
            })
            .collect();

        vec![CodeFragment::block(
            format!("export enum {} {{", self.name),
            body,
            Some("}".to_string()),
        )]
    }
}
