//! Generate command report data structures.

use std::path::PathBuf;

use table2enum_codegen::Diagnostic;

use super::output::{Output, Report};

/// Report data from a generate run.
#[derive(Debug)]
pub struct GenerateReport {
    pub enum_name: String,
    pub row_count: usize,
    /// Lint findings, in lint order.
    pub diagnostics: Vec<Diagnostic>,
    pub result: GenerationResult,
}

/// What happened to the outputs.
#[derive(Debug)]
pub enum GenerationResult {
    /// Lint errors stopped the run before anything was rendered.
    Blocked,
    /// Rendered but not written (`--dry-run`).
    Preview(Vec<OutputFile>),
    /// Written to disk.
    Written(Vec<OutputFile>),
}

/// One rendered output file.
#[derive(Debug)]
pub struct OutputFile {
    pub language: &'static str,
    pub path: PathBuf,
    pub content: String,
}

impl GenerateReport {
    pub fn error_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity.is_error())
            .count()
    }

    pub fn is_blocked(&self) -> bool {
        self.error_count() > 0
    }
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        for diag in &self.diagnostics {
            out.diagnostic(&diag.to_string());
        }
        if !self.diagnostics.is_empty() {
            out.newline();
        }

        match &self.result {
            GenerationResult::Blocked => {}
            GenerationResult::Preview(files) => {
                for file in files {
                    out.divider(&file.path.display().to_string());
                    out.preformatted(&file.content);
                }
                out.divider("Summary");
                out.preformatted(&format!(
                    "{} with {} member{} would be written to {} file{}",
                    self.enum_name,
                    self.row_count,
                    plural(self.row_count),
                    files.len(),
                    plural(files.len())
                ));
            }
            GenerationResult::Written(files) => {
                out.key_value("Enum", &self.enum_name);
                out.key_value("Members", &self.row_count.to_string());
                out.newline();
                out.section("Generated");
                for file in files {
                    out.added_item(&format!("{} ({})", file.path.display(), file.language));
                }
            }
        }
    }
}

fn plural(n: usize) -> &'static str {
    if n == 1 { "" } else { "s" }
}
