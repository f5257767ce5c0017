//! The `table2enum.toml` file and command-line overrides.

use std::{
    path::{Path, PathBuf},
    str::FromStr,
};

use serde::Deserialize;

use crate::{Error, Result};

/// File looked up in the working directory when no `--config` is given.
pub const DEFAULT_FILE_NAME: &str = "table2enum.toml";

/// Raw, unvalidated options.
///
/// ```toml
/// [source]
/// connection_string = "host=localhost user=postgres dbname=app"
/// table = "city"
/// id_column = "id"
/// description_column = "name"
///
/// [enum]
/// name = "City"
/// black_words = ["city"]
///
/// [csharp]
/// file = "City.cs"
/// namespace = "Acme.Domain"
/// imports = ["System.ComponentModel"]
///
/// [typescript]
/// file = "city.ts"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    #[serde(default)]
    pub source: SourceSection,

    #[serde(default, rename = "enum")]
    pub enumeration: EnumSection,

    #[serde(default)]
    pub csharp: CsharpSection,

    #[serde(default)]
    pub typescript: TypeScriptSection,
}

/// Where the rows come from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SourceSection {
    pub connection_string: Option<String>,
    pub connection_string_config_file: Option<PathBuf>,
    pub table: Option<String>,
    pub id_column: Option<String>,
    pub description_column: Option<String>,
}

/// The generated enum.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EnumSection {
    pub name: Option<String>,
    #[serde(default)]
    pub black_words: Vec<String>,
}

/// C# output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CsharpSection {
    pub file: Option<PathBuf>,
    pub namespace: Option<String>,
    #[serde(default)]
    pub imports: Vec<String>,
}

/// TypeScript output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TypeScriptSection {
    pub file: Option<PathBuf>,
}

impl FromStr for Manifest {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_str_with_filename(s, DEFAULT_FILE_NAME)
    }
}

impl Manifest {
    /// Parse a manifest from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::parse(e, content, filename))
    }

    /// Parse a manifest file.
    ///
    /// Relative paths inside the file are resolved against the file's
    /// directory.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        let manifest = Self::from_str_with_filename(&content, &path.display().to_string())?;

        Ok(match path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => manifest.rebase(dir),
            _ => manifest,
        })
    }

    /// Load the manifest to use for a run.
    ///
    /// An explicit path must exist. Without one, [`DEFAULT_FILE_NAME`] in
    /// `dir` is used if present, otherwise an empty manifest.
    pub fn discover(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        let default = dir.join(DEFAULT_FILE_NAME);
        if default.is_file() {
            Self::from_file(default)
        } else {
            Ok(Self::default())
        }
    }

    /// Layer `overrides` on top of `self`.
    ///
    /// Scalar values set in `overrides` win; non-empty lists in `overrides`
    /// replace the lists in `self`.
    ///
    /// The two connection options count as one setting: if `overrides` sets
    /// either of them, both are taken from `overrides`.
    pub fn merge(self, overrides: Manifest) -> Manifest {
        let (connection_string, connection_string_config_file) =
            if overrides.source.connection_string.is_some()
                || overrides.source.connection_string_config_file.is_some()
            {
                (
                    overrides.source.connection_string,
                    overrides.source.connection_string_config_file,
                )
            } else {
                (
                    self.source.connection_string,
                    self.source.connection_string_config_file,
                )
            };

        Manifest {
            source: SourceSection {
                connection_string,
                connection_string_config_file,
                table: overrides.source.table.or(self.source.table),
                id_column: overrides.source.id_column.or(self.source.id_column),
                description_column: overrides
                    .source
                    .description_column
                    .or(self.source.description_column),
            },
            enumeration: EnumSection {
                name: overrides.enumeration.name.or(self.enumeration.name),
                black_words: prefer_non_empty(
                    overrides.enumeration.black_words,
                    self.enumeration.black_words,
                ),
            },
            csharp: CsharpSection {
                file: overrides.csharp.file.or(self.csharp.file),
                namespace: overrides.csharp.namespace.or(self.csharp.namespace),
                imports: prefer_non_empty(overrides.csharp.imports, self.csharp.imports),
            },
            typescript: TypeScriptSection {
                file: overrides.typescript.file.or(self.typescript.file),
            },
        }
    }

    fn rebase(mut self, dir: &Path) -> Self {
        let rebase = |path: &mut Option<PathBuf>| {
            if let Some(p) = path.as_mut().filter(|p| p.is_relative()) {
                *p = dir.join(&*p);
            }
        };
        rebase(&mut self.source.connection_string_config_file);
        rebase(&mut self.csharp.file);
        rebase(&mut self.typescript.file);
        self
    }
}

fn prefer_non_empty(preferred: Vec<String>, fallback: Vec<String>) -> Vec<String> {
    if preferred.is_empty() {
        fallback
    } else {
        preferred
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_manifest() {
        let manifest: Manifest = r#"
            [source]
            connection_string = "host=localhost"
            table = "city"
            id_column = "id"
            description_column = "name"

            [enum]
            name = "City"
            black_words = ["city"]

            [csharp]
            file = "City.cs"
            namespace = "Acme"
            imports = ["System.ComponentModel"]

            [typescript]
            file = "city.ts"
        "#
        .parse()
        .unwrap();

        assert_eq!(manifest.source.table.as_deref(), Some("city"));
        assert_eq!(manifest.enumeration.black_words, vec!["city"]);
        assert_eq!(manifest.csharp.imports, vec!["System.ComponentModel"]);
        assert_eq!(manifest.typescript.file, Some(PathBuf::from("city.ts")));
    }

    #[test]
    fn test_empty_manifest() {
        let manifest: Manifest = "".parse().unwrap();
        assert_eq!(manifest, Manifest::default());
    }

    #[test]
    fn test_unknown_key_is_parse_error() {
        let err = Manifest::from_str("[source]\ntabel = \"city\"\n").unwrap_err();
        match *err {
            Error::Parse { span, .. } => assert!(span.is_some()),
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_merge_prefers_overrides() {
        let file: Manifest = r#"
            [source]
            table = "city"
            id_column = "id"

            [enum]
            black_words = ["city"]

            [csharp]
            imports = ["System"]
        "#
        .parse()
        .unwrap();

        let mut cli = Manifest::default();
        cli.source.table = Some("town".to_string());
        cli.csharp.imports = vec!["System.ComponentModel".to_string()];

        let merged = file.merge(cli);
        assert_eq!(merged.source.table.as_deref(), Some("town"));
        assert_eq!(merged.source.id_column.as_deref(), Some("id"));
        assert_eq!(merged.enumeration.black_words, vec!["city"]);
        assert_eq!(merged.csharp.imports, vec!["System.ComponentModel"]);
    }

    #[test]
    fn test_merge_replaces_connection_choice() {
        let file: Manifest = "[source]\nconnection_string = \"host=db\"\n".parse().unwrap();

        let mut cli = Manifest::default();
        cli.source.connection_string_config_file = Some(PathBuf::from("app.config"));
        let merged = file.clone().merge(cli);
        assert_eq!(merged.source.connection_string, None);
        assert_eq!(
            merged.source.connection_string_config_file,
            Some(PathBuf::from("app.config"))
        );

        let merged = file.merge(Manifest::default());
        assert_eq!(merged.source.connection_string.as_deref(), Some("host=db"));

        let config_file: Manifest = "[source]\nconnection_string_config_file = \"app.config\"\n"
            .parse()
            .unwrap();
        let mut cli = Manifest::default();
        cli.source.connection_string = Some("host=cli".to_string());
        let merged = config_file.merge(cli);
        assert_eq!(merged.source.connection_string.as_deref(), Some("host=cli"));
        assert_eq!(merged.source.connection_string_config_file, None);
    }

    #[test]
    fn test_rebase_only_touches_relative_paths() {
        let mut manifest = Manifest::default();
        manifest.csharp.file = Some(PathBuf::from("out/City.cs"));
        manifest.typescript.file = Some(PathBuf::from("/abs/city.ts"));

        let rebased = manifest.rebase(Path::new("/project"));
        assert_eq!(rebased.csharp.file, Some(PathBuf::from("/project/out/City.cs")));
        assert_eq!(rebased.typescript.file, Some(PathBuf::from("/abs/city.ts")));
    }
}
