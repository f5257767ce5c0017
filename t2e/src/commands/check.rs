use clap::Args;
use eyre::{Context, Result};
use table2enum_manifest::Manifest;

use super::{
    UnwrapOrExit,
    args::{SourceArgs, connect},
};
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Print the entries and diagnostics as JSON
    #[arg(long)]
    pub json: bool,

    /// Treat lint warnings as errors
    #[arg(long)]
    pub strict: bool,
}

impl CheckCommand {
    pub fn run(&self) -> Result<()> {
        let manifest = self.source.load(Manifest::default());
        let settings = manifest.source_settings().unwrap_or_exit();
        let mut source = connect(&settings)?;

        let report = ops::check(
            &settings,
            &manifest.enumeration.black_words,
            &mut source,
            self.strict,
        )?;

        if self.json {
            let json = serde_json::to_string_pretty(&report).wrap_err("Failed to serialize report")?;
            println!("{}", json);
        } else {
            report.render(&mut TerminalOutput::new());
        }

        if report.has_errors() {
            std::process::exit(1);
        }
        Ok(())
    }
}
