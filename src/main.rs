// Desktop/tooling crate — unwrap/expect/panic acceptable in non-embedded code.
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod error;
mod generate;
mod header;
mod pipeline;
mod report;
mod resolve;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use crate::generate::ScriptGenerator;
use crate::pipeline::Options;

/// Pre-build hook for the LED wall firmware: generates src/config_autogen.h
/// from a device config JSON via scripts/gen_config.py.
#[derive(Parser)]
#[command(name = "prebuild")]
#[command(about = "Generate config_autogen.h from a device config JSON", long_about = None)]
#[command(version)]
struct Cli {
    /// Device config JSON (overrides the LED_CONFIG environment variable).
    /// Absolute, or relative to the project root.
    #[arg(long)]
    config: Option<String>,
    /// Project root directory (default: current directory)
    #[arg(long)]
    project_root: Option<PathBuf>,
    /// Generator script to run (default: <root>/scripts/gen_config.py)
    #[arg(long)]
    generator: Option<PathBuf>,
    /// Destination header (default: <root>/src/config_autogen.h)
    #[arg(long)]
    output: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let project_root = match cli.project_root {
        Some(root) => root,
        None => match std::env::current_dir() {
            Ok(cwd) => cwd,
            Err(e) => {
                eprintln!("ERROR: cannot determine current directory: {e}");
                return ExitCode::FAILURE;
            }
        },
    };

    // Environment lookup happens once, here at the boundary; the pipeline
    // only ever sees an explicit optional value.
    let config = cli
        .config
        .or_else(|| std::env::var("LED_CONFIG").ok())
        .filter(|v| !v.is_empty());

    let script = cli
        .generator
        .unwrap_or_else(|| pipeline::default_generator_script(&project_root));
    let output = cli
        .output
        .unwrap_or_else(|| pipeline::default_output(&project_root));

    let opts = Options {
        project_root,
        config,
        output,
    };
    let generator = ScriptGenerator::new("python3", script);

    match pipeline::run(&opts, &generator) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            report::print_error(&err);
            u8::try_from(err.exit_code())
                .map(ExitCode::from)
                .unwrap_or(ExitCode::FAILURE)
        }
    }
}
