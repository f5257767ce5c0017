//! Intermediate representation types for table2enum.
//!
//! ```text
//! database rows → Row → (normalize) → EnumEntry → EnumModel → emitters
//! ```
//!
//! The IR types are language-agnostic: nothing here knows about C# or
//! TypeScript syntax.

mod entry;
mod row;

pub use entry::{EnumEntry, EnumModel};
pub use row::Row;
