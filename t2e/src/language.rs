//! Output target dispatch.
//!
//! Maps the requested outputs to their emitters.

use std::path::PathBuf;

use table2enum_codegen::EnumEmitter;
use table2enum_codegen_csharp::CsharpEmitter;
use table2enum_codegen_typescript::TypeScriptEmitter;
use table2enum_manifest::Settings;

/// One requested output: an emitter and the file it writes.
pub struct Target {
    pub emitter: Box<dyn EnumEmitter>,
    pub file: PathBuf,
}

impl Target {
    pub fn language(&self) -> &'static str {
        self.emitter.language()
    }
}

/// The requested outputs, C# first.
pub fn targets(settings: &Settings) -> Vec<Target> {
    let mut targets = Vec::with_capacity(settings.target_count());

    if let Some(cs) = &settings.csharp {
        targets.push(Target {
            emitter: Box::new(CsharpEmitter::new(&cs.namespace, cs.imports.clone())),
            file: cs.file.clone(),
        });
    }

    if let Some(ts) = &settings.typescript {
        targets.push(Target {
            emitter: Box::new(TypeScriptEmitter),
            file: ts.file.clone(),
        });
    }

    targets
}
