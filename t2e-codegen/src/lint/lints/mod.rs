//! Built-in lints for derived enum entries.

mod duplicate_identifier;
mod duplicate_value;
mod empty_description;
mod invalid_identifier;

pub use duplicate_identifier::DuplicateIdentifierLint;
pub use duplicate_value::DuplicateValueLint;
pub use empty_description::EmptyDescriptionLint;
pub use invalid_identifier::InvalidIdentifierLint;
