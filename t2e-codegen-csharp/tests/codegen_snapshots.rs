//! Snapshot tests for C# enum generation.
//!
//! Run `cargo insta review` to update snapshots when making intentional changes.

use table2enum_codegen::build_model;
use table2enum_codegen_csharp::{CsharpEmitter, EnumEmitter};
use table2enum_core::StopWords;
use table2enum_ir::Row;

fn generate(rows: &[(i64, &str)], namespace: &str, imports: &[&str]) -> String {
    let rows: Vec<Row> = rows.iter().map(|&(id, d)| Row::new(id, d)).collect();
    let model = build_model("City", &rows, &StopWords::builtin());
    let emitter = CsharpEmitter::new(
        namespace,
        imports.iter().map(|s| s.to_string()).collect(),
    );
    emitter.emit(&model).expect("C# emission failed")
}

#[test]
fn test_cities_enum() {
    let code = generate(
        &[
            (1, "São Paulo"),
            (2, "Rio de Janeiro"),
            (3, "Belo Horizonte"),
        ],
        "Acme.Domain.Enums",
        &["System", "System.ComponentModel"],
    );

    insta::assert_snapshot!(code, @r#"
using System;
using System.ComponentModel;

namespace Acme.Domain.Enums
{
    public enum City
    {
        [Description("São Paulo")]
        SaoPaulo = 1,

        [Description("Rio de Janeiro")]
        RioJaneiro = 2,

        [Description("Belo Horizonte")]
        BeloHorizonte = 3
    }
}
"#);
}

#[test]
fn test_quote_in_description_fails_emission() {
    let rows = vec![Row::new(7, "The \"Big\" Apple")];
    let model = build_model("City", &rows, &StopWords::builtin());
    let emitter = CsharpEmitter::new("Acme", vec!["System.ComponentModel".to_string()]);

    let err = emitter.emit(&model).unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid C# enum member name '\"big\"Apple': name must start with a letter or underscore"
    );
}

#[test]
fn test_empty_table() {
    let code = generate(&[], "Acme", &["System.ComponentModel"]);

    insta::assert_snapshot!(code, @r#"
using System.ComponentModel;

namespace Acme
{
    public enum City
    {
    }
}
"#);
}
