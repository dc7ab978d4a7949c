//! Generator invocation.
//!
//! The generator is an opaque external collaborator: it takes the resolved
//! config path as its sole positional argument, prints the full header text
//! on stdout, and keeps diagnostics on stderr (stdout is written verbatim to
//! the header file, so anything else on stdout would corrupt it).
//!
//! The pipeline talks to it through the [`Generator`] trait so tests can
//! inject a fake instead of spawning a real process.

use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::Context;

use crate::error::PrebuildError;

/// Captured output of a successful generator run.
#[derive(Debug)]
pub struct GeneratorRun {
    /// Header text, written verbatim to the destination.
    pub stdout: String,
    /// Diagnostics, echoed to the operator but never persisted.
    pub stderr: String,
}

pub trait Generator {
    /// Run the generator against `config`, fully buffering its output.
    ///
    /// Blocks until the generator exits; no timeout (an unbounded wait is
    /// the current contract). A non-zero exit is returned as
    /// [`PrebuildError::GeneratorFailed`] with stderr attached verbatim.
    fn generate(&self, config: &Path) -> Result<GeneratorRun, PrebuildError>;
}

/// The real generator: `<interpreter> <script> <config>`.
pub struct ScriptGenerator {
    interpreter: String,
    script: PathBuf,
}

impl ScriptGenerator {
    pub fn new(interpreter: impl Into<String>, script: impl Into<PathBuf>) -> Self {
        Self {
            interpreter: interpreter.into(),
            script: script.into(),
        }
    }
}

impl Generator for ScriptGenerator {
    fn generate(&self, config: &Path) -> Result<GeneratorRun, PrebuildError> {
        let output = Command::new(&self.interpreter)
            .arg(&self.script)
            .arg(config)
            .output()
            .with_context(|| {
                format!(
                    "Failed to run generator: {} {}",
                    self.interpreter,
                    self.script.display()
                )
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

        if !output.status.success() {
            return Err(PrebuildError::GeneratorFailed {
                code: output.status.code(),
                stderr,
            });
        }

        Ok(GeneratorRun { stdout, stderr })
    }
}
