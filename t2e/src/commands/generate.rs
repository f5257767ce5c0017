use std::path::PathBuf;

use clap::Args;
use eyre::{Result, bail};
use table2enum_manifest::{CsharpSection, EnumSection, Manifest, TypeScriptSection};

use super::{
    UnwrapOrExit,
    args::{SourceArgs, connect},
};
use crate::{
    ops::{self, GenerateOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Name of the generated enum
    #[arg(short = 'c', long)]
    pub class_name: Option<String>,

    /// C# output file
    #[arg(long)]
    pub csharp_file: Option<PathBuf>,

    /// TypeScript output file
    #[arg(long)]
    pub typescript_file: Option<PathBuf>,

    /// Namespace of the C# enum
    #[arg(long, alias = "name-space")]
    pub namespace: Option<String>,

    /// Namespaces to import in the C# file (repeatable)
    #[arg(short, long, value_name = "NAMESPACE", num_args = 1..)]
    pub imports: Vec<String>,

    /// Print the generated files instead of writing them
    #[arg(long)]
    pub dry_run: bool,

    /// Treat lint warnings as errors
    #[arg(long)]
    pub strict: bool,
}

impl GenerateCommand {
    pub fn run(&self) -> Result<()> {
        let settings = self.manifest().validate().unwrap_or_exit();
        let mut source = connect(&settings.source)?;

        let report = ops::generate(
            &settings,
            &mut source,
            GenerateOptions {
                dry_run: self.dry_run,
                strict: self.strict,
            },
        )?;
        report.render(&mut TerminalOutput::new());

        if report.is_blocked() {
            bail!(
                "{} lint error(s) with --strict; nothing was written",
                report.error_count()
            );
        }
        Ok(())
    }

    fn manifest(&self) -> Manifest {
        self.source.load(Manifest {
            enumeration: EnumSection {
                name: self.class_name.clone(),
                black_words: Vec::new(),
            },
            csharp: CsharpSection {
                file: self.csharp_file.clone(),
                namespace: self.namespace.clone(),
                imports: self.imports.clone(),
            },
            typescript: TypeScriptSection {
                file: self.typescript_file.clone(),
            },
            ..Default::default()
        })
    }
}
