//! Operator-facing console output.
//!
//! Failure diagnostics go to stderr; progress and the final confirmation go
//! to stdout. The confirmation names the written header relative to the
//! project root so it matches what the firmware build includes.

use std::path::Path;

use colored::Colorize;

use crate::error::PrebuildError;

const RULE: &str = "════════════════════════════════════════════════════════════";

/// Print the diagnostic for a pipeline failure.
pub fn print_error(err: &PrebuildError) {
    match err {
        PrebuildError::ConfigNotSpecified { candidates } => {
            eprintln!();
            eprintln!("{}", RULE.red());
            eprintln!(
                "{}",
                "ERROR: LED_CONFIG environment variable not set".red().bold()
            );
            eprintln!("{}", RULE.red());
            eprintln!();
            eprintln!("Usage:");
            eprintln!("  LED_CONFIG=config/left.json prebuild");
            eprintln!("  LED_CONFIG=/path/to/device.json prebuild");
            eprintln!("  prebuild --config config/left.json");
            if !candidates.is_empty() {
                eprintln!();
                eprintln!("Available configs in this repo:");
                for candidate in candidates {
                    eprintln!("  - {}", candidate.display());
                }
            }
            eprintln!();
        }
        PrebuildError::ConfigNotFound { .. } => {
            eprintln!();
            eprintln!("{}", format!("ERROR: {err}").red().bold());
            eprintln!();
        }
        PrebuildError::GeneratorFailed { stderr, .. } => {
            eprintln!();
            eprintln!("{}", "ERROR: Config generation failed:".red().bold());
            eprintln!("{stderr}");
            eprintln!();
        }
        PrebuildError::Other(inner) => {
            eprintln!();
            eprintln!("{}", format!("ERROR: {inner:#}").red().bold());
            eprintln!();
        }
    }
}

pub fn print_generating(config: &Path) {
    println!(
        "{}",
        format!("Generating config from: {}", config.display()).cyan()
    );
}

/// Final confirmation, naming the header relative to the project root when
/// it lives under it.
pub fn print_generated(output: &Path, project_root: &Path) {
    let shown = output.strip_prefix(project_root).unwrap_or(output);
    println!("{}", format!("Generated: {}", shown.display()).green());
}
