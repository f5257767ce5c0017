//! Language-specific abstractions.
//!
//! - [`EnumEmitter`] - Trait implemented by each target language
//! - [`NamingConvention`] - Member naming and reserved words per language

mod naming;
mod traits;

pub use naming::{CSHARP_NAMING, NamingConvention, TYPESCRIPT_NAMING, identifier_error};
pub use traits::EnumEmitter;
