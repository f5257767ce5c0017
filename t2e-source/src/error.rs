use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Result type for row sources (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read connection config '{path}'")]
    #[diagnostic(code(table2enum::source::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed XML in '{path}'")]
    #[diagnostic(code(table2enum::source::xml))]
    Xml {
        path: PathBuf,
        #[source]
        source: quick_xml::Error,
    },

    #[error("connection string not found in '{path}'")]
    #[diagnostic(
        code(table2enum::source::connection_not_found),
        help("expected <connectionStrings><add connectionString=\"...\" /></connectionStrings>")
    )]
    ConnectionNotFound { path: PathBuf },

    #[error("database error")]
    #[diagnostic(code(table2enum::source::database))]
    Database(#[from] postgres::Error),

    #[error("row with id {id} has a NULL description")]
    #[diagnostic(
        code(table2enum::source::null_description),
        help("filter NULL descriptions out of the table or give the row a description")
    )]
    NullDescription { id: i64 },

    #[error("row {index} has a NULL id")]
    #[diagnostic(code(table2enum::source::null_id))]
    NullId { index: usize },
}

impl From<postgres::Error> for Box<Error> {
    fn from(e: postgres::Error) -> Self {
        Box::new(Error::Database(e))
    }
}
