//! Snapshot tests for TypeScript enum generation.
//!
//! Run `cargo insta review` to update snapshots when making intentional changes.

use table2enum_codegen::build_model;
use table2enum_codegen_typescript::{EnumEmitter, TypeScriptEmitter};
use table2enum_core::StopWords;
use table2enum_ir::Row;

fn generate(rows: &[(i64, &str)], extra_stop_words: &[&str]) -> String {
    let rows: Vec<Row> = rows.iter().map(|&(id, d)| Row::new(id, d)).collect();
    let stop_words = StopWords::with_additional(extra_stop_words.iter().copied());
    let model = build_model("City", &rows, &stop_words);
    TypeScriptEmitter
        .emit(&model)
        .expect("TypeScript emission failed")
}

#[test]
fn test_end_to_end_scenario_exact_text() {
    let code = generate(&[(1, "Sao Paulo"), (2, "Rio de Janeiro")], &[]);
    assert_eq!(
        code,
        "export enum City {\n    saoPaulo = 1,\n    rioJaneiro = 2\n}\n"
    );
}

#[test]
fn test_diacritics_and_extra_stop_words() {
    let code = generate(
        &[
            (10, "São Paulo City"),
            (20, "Brasília City"),
            (30, "Mato Grosso do Sul"),
        ],
        &["city"],
    );

    insta::assert_snapshot!(code, @r"
export enum City {
    saoPaulo = 10,
    brasilia = 20,
    matoGrossoSul = 30
}
");
}
