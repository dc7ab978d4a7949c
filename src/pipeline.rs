//! The pre-build pipeline: resolve → generate → write.
//!
//! Strictly linear and single-shot. Any failure aborts before the header is
//! touched, so the destination only ever holds the output of a fully
//! successful generator run.

use std::path::{Path, PathBuf};

use crate::error::PrebuildError;
use crate::generate::Generator;
use crate::header;
use crate::report;
use crate::resolve;

/// Everything the pipeline needs, gathered at the boundary in `main`.
pub struct Options {
    /// Absolute project root; relative config paths resolve against it.
    pub project_root: PathBuf,
    /// Raw config value from `--config` or `LED_CONFIG`, if any.
    pub config: Option<String>,
    /// Destination header path.
    pub output: PathBuf,
}

/// Run the pipeline once. Returns the resolved config path on success.
pub fn run(opts: &Options, generator: &dyn Generator) -> Result<PathBuf, PrebuildError> {
    let config = resolve::resolve_config(opts.config.as_deref(), &opts.project_root)?;

    report::print_generating(&config);
    let generated = generator.generate(&config)?;
    if !generated.stderr.is_empty() {
        // Generator warnings are not persisted, only shown.
        eprint!("{}", generated.stderr);
    }

    header::write_header(&opts.output, &generated.stdout)?;
    report::print_generated(&opts.output, &opts.project_root);

    Ok(config)
}

/// Conventional destination: `<root>/src/config_autogen.h`.
pub fn default_output(project_root: &Path) -> PathBuf {
    project_root.join("src").join("config_autogen.h")
}

/// Conventional generator script: `<root>/scripts/gen_config.py`.
pub fn default_generator_script(project_root: &Path) -> PathBuf {
    project_root.join("scripts").join("gen_config.py")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate::GeneratorRun;
    use std::cell::RefCell;
    use std::fs;
    use tempfile::TempDir;

    /// Records invocations and returns a canned result.
    /// `stdout = None` simulates a generator exiting non-zero.
    struct FakeGenerator {
        calls: RefCell<Vec<PathBuf>>,
        stdout: Option<String>,
    }

    impl FakeGenerator {
        fn ok(stdout: &str) -> Self {
            Self {
                calls: RefCell::new(Vec::new()),
                stdout: Some(stdout.to_owned()),
            }
        }

        fn failing() -> Self {
            Self {
                calls: RefCell::new(Vec::new()),
                stdout: None,
            }
        }

        fn call_count(&self) -> usize {
            self.calls.borrow().len()
        }
    }

    impl Generator for FakeGenerator {
        fn generate(&self, config: &Path) -> Result<GeneratorRun, PrebuildError> {
            self.calls.borrow_mut().push(config.to_path_buf());
            match &self.stdout {
                Some(stdout) => Ok(GeneratorRun {
                    stdout: stdout.clone(),
                    stderr: String::new(),
                }),
                None => Err(PrebuildError::GeneratorFailed {
                    code: Some(1),
                    stderr: "invalid JSON\n".into(),
                }),
            }
        }
    }

    fn project_with_config() -> TempDir {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("config")).unwrap();
        fs::write(tmp.path().join("config/left.json"), b"{}").unwrap();
        tmp
    }

    fn options(root: &TempDir, config: Option<&str>) -> Options {
        Options {
            project_root: root.path().to_path_buf(),
            config: config.map(String::from),
            output: default_output(root.path()),
        }
    }

    #[test]
    fn successful_run_writes_generator_stdout_exactly() {
        let tmp = project_with_config();
        let opts = options(&tmp, Some("config/left.json"));
        let generator = FakeGenerator::ok("#define LED_COUNT 30\n");

        let config = run(&opts, &generator).unwrap();

        assert_eq!(config, tmp.path().join("config/left.json"));
        assert_eq!(generator.call_count(), 1);
        assert_eq!(
            fs::read(tmp.path().join("src/config_autogen.h")).unwrap(),
            b"#define LED_COUNT 30\n"
        );
    }

    #[test]
    fn rerun_with_same_output_is_byte_identical() {
        let tmp = project_with_config();
        let opts = options(&tmp, Some("config/left.json"));
        let generator = FakeGenerator::ok("#define LED_COUNT 30\n");

        run(&opts, &generator).unwrap();
        let first = fs::read(tmp.path().join("src/config_autogen.h")).unwrap();
        run(&opts, &generator).unwrap();
        let second = fs::read(tmp.path().join("src/config_autogen.h")).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn unspecified_config_never_invokes_generator_or_writes() {
        let tmp = project_with_config();
        let opts = options(&tmp, None);
        let generator = FakeGenerator::ok("#define LED_COUNT 30\n");

        let err = run(&opts, &generator).unwrap_err();

        assert!(matches!(err, PrebuildError::ConfigNotSpecified { .. }));
        assert_eq!(generator.call_count(), 0);
        assert!(!tmp.path().join("src/config_autogen.h").exists());
    }

    #[test]
    fn missing_config_never_invokes_generator_or_writes() {
        let tmp = project_with_config();
        let opts = options(&tmp, Some("config/missing.json"));
        let generator = FakeGenerator::ok("#define LED_COUNT 30\n");

        let err = run(&opts, &generator).unwrap_err();

        assert!(matches!(err, PrebuildError::ConfigNotFound { .. }));
        assert_eq!(generator.call_count(), 0);
        assert!(!tmp.path().join("src/config_autogen.h").exists());
    }

    #[test]
    fn generator_failure_leaves_absent_header_absent() {
        let tmp = project_with_config();
        let opts = options(&tmp, Some("config/left.json"));
        let generator = FakeGenerator::failing();

        let err = run(&opts, &generator).unwrap_err();

        match err {
            PrebuildError::GeneratorFailed { stderr, .. } => {
                assert!(stderr.contains("invalid JSON"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(!tmp.path().join("src/config_autogen.h").exists());
    }

    #[test]
    fn generator_failure_leaves_existing_header_unmodified() {
        let tmp = project_with_config();
        let opts = options(&tmp, Some("config/left.json"));
        fs::create_dir_all(tmp.path().join("src")).unwrap();
        fs::write(
            tmp.path().join("src/config_autogen.h"),
            b"#define LED_COUNT 8\n",
        )
        .unwrap();

        run(&opts, &FakeGenerator::failing()).unwrap_err();

        assert_eq!(
            fs::read(tmp.path().join("src/config_autogen.h")).unwrap(),
            b"#define LED_COUNT 8\n"
        );
    }
}
