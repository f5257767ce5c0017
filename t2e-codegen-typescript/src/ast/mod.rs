//! TypeScript syntax nodes.

mod enums;

pub use enums::{ExportEnum, Member};
