//! Error taxonomy for the pre-build pipeline.
//!
//! Every failure is terminal: `main` reports it and exits with the
//! per-kind code from [`PrebuildError::exit_code`]. No error crosses the
//! pipeline boundary as a panic, and no output file is written on any
//! failure path.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum PrebuildError {
    /// Neither `LED_CONFIG` nor `--config` supplied a config path.
    /// Carries the candidate configs found under `<root>/config/` for the
    /// usage banner.
    #[error("LED_CONFIG environment variable not set")]
    ConfigNotSpecified { candidates: Vec<PathBuf> },

    /// The resolved config path does not exist as a regular file.
    #[error("Config file not found: {}", path.display())]
    ConfigNotFound { path: PathBuf },

    /// The generator exited non-zero. `stderr` is surfaced verbatim.
    #[error("Config generation failed (generator exit code {code:?})")]
    GeneratorFailed { code: Option<i32>, stderr: String },

    /// Incidental I/O failure (spawn, read, write), with context attached.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PrebuildError {
    /// Process exit code for this failure kind. Success is 0; every
    /// failure kind gets a distinct non-zero code.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConfigNotSpecified { .. } => 2,
            Self::ConfigNotFound { .. } => 3,
            Self::GeneratorFailed { .. } => 4,
            Self::Other(_) => 1,
        }
    }
}
