//! Generate operation - rows in, enum files out.

use eyre::{Context, Result};
use table2enum_codegen::build_model;
use table2enum_core::{File, StopWords};
use table2enum_manifest::Settings;
use table2enum_source::{RowSource, TableQuery};
use tracing::{debug, info, warn};

use super::lint;
use crate::{
    language,
    reports::{GenerateReport, GenerationResult, OutputFile},
};

/// Options for the generate operation.
#[derive(Debug, Clone, Copy, Default)]
pub struct GenerateOptions {
    /// Return the files instead of writing them.
    pub dry_run: bool,
    /// Refuse to generate when any lint fires.
    pub strict: bool,
}

/// Execute the generate operation.
///
/// Every output is rendered before the first file is written, so an
/// emission failure leaves the file system untouched.
pub fn generate(
    settings: &Settings,
    source: &mut dyn RowSource,
    opts: GenerateOptions,
) -> Result<GenerateReport> {
    let query = TableQuery::from(&settings.source);
    let rows = source
        .fetch_rows(&query)
        .wrap_err_with(|| format!("Failed to read table '{}'", query.table))?;
    info!(table = %query.table, rows = rows.len(), "fetched rows");

    let stop_words = StopWords::with_additional(&settings.black_words);
    let model = build_model(&settings.enum_name, &rows, &stop_words);
    let diagnostics = lint(&model.entries, opts.strict);

    let mut report = GenerateReport {
        enum_name: model.name.clone(),
        row_count: rows.len(),
        diagnostics,
        result: GenerationResult::Blocked,
    };
    if report.is_blocked() {
        return Ok(report);
    }

    let mut files = Vec::new();
    for target in language::targets(settings) {
        debug!(language = target.language(), file = %target.file.display(), "emitting enum");
        let extension = target.emitter.file_extension();
        if target.file.extension().and_then(|e| e.to_str()) != Some(extension) {
            warn!(
                file = %target.file.display(),
                "{} output usually has a .{} extension",
                target.language(),
                extension
            );
        }
        let code = target
            .emitter
            .emit(&model)
            .wrap_err_with(|| format!("Failed to generate {} code", target.language()))?;
        files.push((target.language(), File::new(&target.file, code)));
    }

    let outputs = files
        .iter()
        .map(|(language, file)| OutputFile {
            language: *language,
            path: file.path().to_path_buf(),
            content: file.content().to_string(),
        })
        .collect();

    report.result = if opts.dry_run {
        GenerationResult::Preview(outputs)
    } else {
        for (_, file) in &files {
            file.write()?;
            info!(file = %file.path().display(), "wrote file");
        }
        GenerationResult::Written(outputs)
    };

    Ok(report)
}
