//! Validated, typed settings.

use std::path::PathBuf;

use crate::{Error, Manifest, Result};

/// Where to get the database connection string from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnectionSource {
    /// Used as-is.
    Direct(String),
    /// XML file with a `<connectionStrings><add connectionString="..."/>` entry.
    ConfigFile(PathBuf),
}

impl ConnectionSource {
    /// Short label for logs; never includes the connection string itself.
    pub fn kind(&self) -> &'static str {
        match self {
            ConnectionSource::Direct(_) => "direct",
            ConnectionSource::ConfigFile(_) => "config-file",
        }
    }
}

/// Everything needed to read the rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceSettings {
    pub connection: ConnectionSource,
    pub table: String,
    pub id_column: String,
    pub description_column: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsharpTarget {
    pub file: PathBuf,
    pub namespace: String,
    pub imports: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeScriptTarget {
    pub file: PathBuf,
}

/// Settings for a `generate` run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub source: SourceSettings,
    pub enum_name: String,
    /// Stop words added to the built-in ones.
    pub black_words: Vec<String>,
    pub csharp: Option<CsharpTarget>,
    pub typescript: Option<TypeScriptTarget>,
}

impl Settings {
    /// Number of requested outputs.
    pub fn target_count(&self) -> usize {
        usize::from(self.csharp.is_some()) + usize::from(self.typescript.is_some())
    }
}

impl Manifest {
    /// Validate the options needed to query the table.
    pub fn source_settings(&self) -> Result<SourceSettings> {
        let source = &self.source;
        let table = required(&source.table, "--table", "source.table")?;
        let id_column = required(&source.id_column, "--id-column", "source.id_column")?;
        let description_column = required(
            &source.description_column,
            "--description-column",
            "source.description_column",
        )?;

        let direct = present(&source.connection_string);
        let config_file = source
            .connection_string_config_file
            .as_ref()
            .filter(|p| !p.as_os_str().is_empty());

        let connection = match (direct, config_file) {
            (Some(_), Some(_)) => return Err(Box::new(Error::ConflictingConnection)),
            (Some(s), None) => ConnectionSource::Direct(s.to_string()),
            (None, Some(path)) => ConnectionSource::ConfigFile(path.clone()),
            (None, None) => return Err(Box::new(Error::MissingConnection)),
        };

        Ok(SourceSettings {
            connection,
            table,
            id_column,
            description_column,
        })
    }

    /// Validate the options for a `generate` run.
    ///
    /// Reports the first problem found. Nothing here touches the database or
    /// the file system.
    pub fn validate(&self) -> Result<Settings> {
        let source = self.source_settings()?;
        let enum_name = required(&self.enumeration.name, "--class-name", "enum.name")?;

        let csharp = match &self.csharp.file {
            Some(file) => {
                let namespace = required(&self.csharp.namespace, "--namespace", "csharp.namespace")?;
                let imports: Vec<String> = self
                    .csharp
                    .imports
                    .iter()
                    .map(|i| i.trim())
                    .filter(|i| !i.is_empty())
                    .map(str::to_string)
                    .collect();
                if imports.is_empty() {
                    return Err(Error::missing("--imports", "csharp.imports"));
                }
                Some(CsharpTarget {
                    file: file.clone(),
                    namespace,
                    imports,
                })
            }
            None => None,
        };

        let typescript = self
            .typescript
            .file
            .as_ref()
            .map(|file| TypeScriptTarget { file: file.clone() });

        if csharp.is_none() && typescript.is_none() {
            return Err(Box::new(Error::NoOutput));
        }

        Ok(Settings {
            source,
            enum_name,
            black_words: self.enumeration.black_words.clone(),
            csharp,
            typescript,
        })
    }
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

fn required(value: &Option<String>, flag: &'static str, key: &'static str) -> Result<String> {
    present(value)
        .map(str::to_string)
        .ok_or_else(|| Error::missing(flag, key))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete() -> Manifest {
        r#"
            [source]
            connection_string = "host=localhost dbname=app"
            table = "city"
            id_column = "id"
            description_column = "name"

            [enum]
            name = "City"

            [csharp]
            file = "City.cs"
            namespace = "Acme.Domain"
            imports = ["System.ComponentModel"]

            [typescript]
            file = "city.ts"
        "#
        .parse()
        .unwrap()
    }

    fn missing_key(err: Box<Error>) -> &'static str {
        match *err {
            Error::MissingOption { key, .. } => key,
            other => panic!("expected missing option, got {other:?}"),
        }
    }

    #[test]
    fn test_complete_manifest_validates() {
        let settings = complete().validate().unwrap();

        assert_eq!(
            settings.source.connection,
            ConnectionSource::Direct("host=localhost dbname=app".to_string())
        );
        assert_eq!(settings.enum_name, "City");
        assert_eq!(settings.target_count(), 2);
        assert_eq!(
            settings.csharp.unwrap().imports,
            vec!["System.ComponentModel"]
        );
    }

    #[test]
    fn test_missing_table() {
        let mut manifest = complete();
        manifest.source.table = None;
        assert_eq!(missing_key(manifest.validate().unwrap_err()), "source.table");
    }

    #[test]
    fn test_blank_value_counts_as_missing() {
        let mut manifest = complete();
        manifest.enumeration.name = Some("  ".to_string());
        assert_eq!(missing_key(manifest.validate().unwrap_err()), "enum.name");
    }

    #[test]
    fn test_connection_is_required_once() {
        let mut manifest = complete();
        manifest.source.connection_string = None;
        assert!(matches!(
            *manifest.validate().unwrap_err(),
            Error::MissingConnection
        ));

        let mut manifest = complete();
        manifest.source.connection_string_config_file = Some(PathBuf::from("app.config"));
        assert!(matches!(
            *manifest.validate().unwrap_err(),
            Error::ConflictingConnection
        ));
    }

    #[test]
    fn test_config_file_connection() {
        let mut manifest = complete();
        manifest.source.connection_string = None;
        manifest.source.connection_string_config_file = Some(PathBuf::from("app.config"));

        let source = manifest.source_settings().unwrap();
        assert_eq!(
            source.connection,
            ConnectionSource::ConfigFile(PathBuf::from("app.config"))
        );
        assert_eq!(source.connection.kind(), "config-file");
    }

    #[test]
    fn test_no_output() {
        let mut manifest = complete();
        manifest.csharp.file = None;
        manifest.typescript.file = None;
        assert!(matches!(*manifest.validate().unwrap_err(), Error::NoOutput));
    }

    #[test]
    fn test_csharp_without_namespace() {
        let mut manifest = complete();
        manifest.csharp.namespace = None;
        assert_eq!(
            missing_key(manifest.validate().unwrap_err()),
            "csharp.namespace"
        );
    }

    #[test]
    fn test_csharp_without_imports() {
        let mut manifest = complete();
        manifest.csharp.imports = vec![" ".to_string()];
        assert_eq!(
            missing_key(manifest.validate().unwrap_err()),
            "csharp.imports"
        );
    }

    #[test]
    fn test_typescript_only_needs_no_namespace() {
        let mut manifest = complete();
        manifest.csharp = Default::default();

        let settings = manifest.validate().unwrap();
        assert!(settings.csharp.is_none());
        assert_eq!(settings.typescript.unwrap().file, PathBuf::from("city.ts"));
    }
}
