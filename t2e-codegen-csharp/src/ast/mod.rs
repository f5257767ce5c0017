//! C# syntax nodes.

mod attribute;
mod enums;
mod namespace;

pub use attribute::{Attribute, string_literal};
pub use enums::{EnumDecl, EnumMember};
pub use namespace::{Namespace, Using};
