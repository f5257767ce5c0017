use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for configuration operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(code(table2enum::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {filename}")]
    #[diagnostic(code(table2enum::parse_error))]
    Parse {
        filename: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("missing required option '{flag}'")]
    #[diagnostic(
        code(table2enum::missing_option),
        help("pass {flag} or set `{key}` in table2enum.toml")
    )]
    MissingOption {
        flag: &'static str,
        key: &'static str,
    },

    #[error("no connection string given")]
    #[diagnostic(
        code(table2enum::missing_connection),
        help("specify --connection-string or --connection-string-config-file")
    )]
    MissingConnection,

    #[error("connection string given twice")]
    #[diagnostic(
        code(table2enum::conflicting_connection),
        help("--connection-string and --connection-string-config-file can't be used together")
    )]
    ConflictingConnection,

    #[error("no output file given")]
    #[diagnostic(
        code(table2enum::no_output),
        help("specify --csharp-file, --typescript-file, or both")
    )]
    NoOutput,
}

impl Error {
    /// Create a parse error from a toml error with source context
    pub fn parse(source: toml::de::Error, src: &str, filename: &str) -> Box<Self> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Parse {
            filename: filename.to_string(),
            src: NamedSource::new(filename, src.to_string()),
            span,
            source,
        })
    }

    pub(crate) fn missing(flag: &'static str, key: &'static str) -> Box<Self> {
        Box::new(Error::MissingOption { flag, key })
    }
}
