use std::path::PathBuf;

use table2enum_manifest::{DEFAULT_FILE_NAME, Error, Manifest};

#[test]
fn test_from_file_resolves_relative_paths() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(DEFAULT_FILE_NAME);
    std::fs::write(
        &path,
        r#"
[source]
connection_string_config_file = "app.config"
table = "city"
id_column = "id"
description_column = "name"

[enum]
name = "City"

[typescript]
file = "generated/city.ts"
"#,
    )
    .unwrap();

    let manifest = Manifest::from_file(&path).unwrap();
    assert_eq!(
        manifest.source.connection_string_config_file,
        Some(dir.path().join("app.config"))
    );
    assert_eq!(
        manifest.typescript.file,
        Some(dir.path().join("generated/city.ts"))
    );
}

#[test]
fn test_discover_default_file() {
    let dir = tempfile::tempdir().unwrap();
    assert_eq!(
        Manifest::discover(None, dir.path()).unwrap(),
        Manifest::default()
    );

    std::fs::write(dir.path().join(DEFAULT_FILE_NAME), "[enum]\nname = \"City\"\n").unwrap();
    let manifest = Manifest::discover(None, dir.path()).unwrap();
    assert_eq!(manifest.enumeration.name.as_deref(), Some("City"));
}

#[test]
fn test_explicit_file_must_exist() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.toml");

    let err = Manifest::discover(Some(&missing), dir.path()).unwrap_err();
    match *err {
        Error::Io { path, .. } => assert_eq!(path, missing),
        other => panic!("expected io error, got {other:?}"),
    }
}

#[test]
fn test_cli_overrides_file() {
    let file: Manifest = "[source]\ntable = \"city\"\n[csharp]\nfile = \"City.cs\"\n"
        .parse()
        .unwrap();
    let mut cli = Manifest::default();
    cli.csharp.file = Some(PathBuf::from("out/City.cs"));

    let merged = file.merge(cli);
    assert_eq!(merged.source.table.as_deref(), Some("city"));
    assert_eq!(merged.csharp.file, Some(PathBuf::from("out/City.cs")));
}

#[test]
fn test_csharp_without_namespace_is_config_error() {
    let manifest: Manifest = r#"
[source]
connection_string = "host=localhost"
table = "city"
id_column = "id"
description_column = "name"

[enum]
name = "City"

[csharp]
file = "City.cs"
imports = ["System.ComponentModel"]
"#
    .parse()
    .unwrap();

    let err = manifest.validate().unwrap_err();
    assert_eq!(err.to_string(), "missing required option '--namespace'");
}
