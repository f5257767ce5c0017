//! Where the rows come from.
//!
//! [`resolve_connection`] turns a [`ConnectionSource`] into a connection
//! string, and a [`RowSource`] runs a [`TableQuery`] against it.
//! [`PostgresSource`] is the database-backed implementation.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod connection;
mod error;
#[cfg(any(test, feature = "testing"))]
mod memory;
mod pg;
mod query;

pub use connection::{resolve_connection, resolve_from_xml};
pub use error::{Error, Result};
#[cfg(any(test, feature = "testing"))]
pub use memory::MemorySource;
pub use pg::PostgresSource;
pub use query::{TableQuery, quote_ident};
pub use table2enum_manifest::ConnectionSource;
use table2enum_ir::Row;

/// Something that can produce the rows of a lookup table.
pub trait RowSource {
    /// Fetch every row of the table, in the order the source returns them.
    fn fetch_rows(&mut self, query: &TableQuery) -> Result<Vec<Row>>;
}
