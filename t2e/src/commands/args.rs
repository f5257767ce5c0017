//! Options shared by the commands that read a table.

use std::path::{Path, PathBuf};

use clap::Args;
use eyre::{Context, Result};
use table2enum_manifest::{Manifest, SourceSection, SourceSettings};
use table2enum_source::{PostgresSource, resolve_connection};
use tracing::info;

use super::UnwrapOrExit;

#[derive(Args)]
pub struct SourceArgs {
    /// Path to table2enum.toml (defaults to ./table2enum.toml when present)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Database connection string
    #[arg(long, conflicts_with = "connection_string_config_file")]
    pub connection_string: Option<String>,

    /// XML file holding the connection string under <connectionStrings>
    #[arg(long)]
    pub connection_string_config_file: Option<PathBuf>,

    /// Table name, optionally schema-qualified
    #[arg(short, long)]
    pub table: Option<String>,

    /// ID column name
    #[arg(long, alias = "identification-column")]
    pub id_column: Option<String>,

    /// Description column name
    #[arg(long)]
    pub description_column: Option<String>,

    /// Extra words to drop from descriptions (repeatable)
    #[arg(long = "black-words", value_name = "WORD", num_args = 1..)]
    pub black_words: Vec<String>,
}

impl SourceArgs {
    /// The config file with these options layered on top.
    pub fn load(&self, overrides: Manifest) -> Manifest {
        let file = Manifest::discover(self.config.as_deref(), Path::new(".")).unwrap_or_exit();

        let mut cli = overrides;
        cli.source = SourceSection {
            connection_string: self.connection_string.clone(),
            connection_string_config_file: self.connection_string_config_file.clone(),
            table: self.table.clone(),
            id_column: self.id_column.clone(),
            description_column: self.description_column.clone(),
        };
        cli.enumeration.black_words = self.black_words.clone();

        file.merge(cli)
    }
}

/// Resolve the connection string and connect.
pub fn connect(settings: &SourceSettings) -> Result<PostgresSource> {
    info!(connection = settings.connection.kind(), "resolving connection string");
    let connection_string =
        resolve_connection(&settings.connection).wrap_err("Failed to resolve connection string")?;

    PostgresSource::connect(&connection_string).wrap_err("Failed to connect to the database")
}
