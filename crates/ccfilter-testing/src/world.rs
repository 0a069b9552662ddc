//! FilterWorld pattern for integration tests.
//!
//! Each world owns a temporary directory for input files and a clean
//! environment: `NO_COLOR` and `CCFILTER_LOG` from the developer's shell never
//! leak into a test run.

use anyhow::Result;
use assert_cmd::Command;
use std::collections::HashMap;
use std::path::PathBuf;
use tempfile::TempDir;

use crate::fixtures::SampleFiles;

const AMBIENT_ENV: [&str; 2] = ["NO_COLOR", "CCFILTER_LOG"];

/// Isolated environment for running the `ccfilter` binary.
///
/// # Example
/// ```no_run
/// use ccfilter_testing::FilterWorld;
///
/// let world = FilterWorld::new();
/// let result = world.run_sample(&["--no-color"], "basic_session.jsonl").unwrap();
/// assert!(result.success());
/// ```
pub struct FilterWorld {
    temp_dir: TempDir,
    env_vars: HashMap<String, String>,
    samples: SampleFiles,
}

impl Default for FilterWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl FilterWorld {
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().expect("Failed to create temp dir"),
            env_vars: HashMap::new(),
            samples: SampleFiles::new(),
        }
    }

    /// Set an environment variable for every run in this world.
    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env_vars.insert(key.into(), value.into());
        self
    }

    /// Write `content` to a file in the world's temp directory.
    pub fn write_input(&self, name: &str, content: &str) -> Result<PathBuf> {
        let path = self.temp_dir.path().join(name);
        std::fs::write(&path, content)?;
        Ok(path)
    }

    /// Build a `ccfilter` command with this world's environment applied.
    #[allow(deprecated)]
    pub fn command(&self) -> Result<Command> {
        let mut cmd = Command::cargo_bin("ccfilter")
            .map_err(|e| anyhow::anyhow!("Failed to find ccfilter binary: {}", e))?;

        for key in AMBIENT_ENV {
            cmd.env_remove(key);
        }
        for (key, value) in &self.env_vars {
            cmd.env(key, value);
        }
        Ok(cmd)
    }

    /// Run with `stdin` fed from memory.
    pub fn run(&self, args: &[&str], stdin: &str) -> Result<CliResult> {
        let mut cmd = self.command()?;
        cmd.args(args).write_stdin(stdin.to_string());
        Self::execute(cmd)
    }

    /// Run with stdin piped from one of the sample sessions.
    pub fn run_sample(&self, args: &[&str], sample_name: &str) -> Result<CliResult> {
        let mut cmd = self.command()?;
        cmd.args(args).pipe_stdin(self.samples.path(sample_name))?;
        Self::execute(cmd)
    }

    fn execute(mut cmd: Command) -> Result<CliResult> {
        let output = cmd.output()?;

        Ok(CliResult {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}

/// Result of a CLI command execution.
#[derive(Debug)]
pub struct CliResult {
    pub status: std::process::ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl CliResult {
    pub fn success(&self) -> bool {
        self.status.success()
    }

    pub fn code(&self) -> Option<i32> {
        self.status.code()
    }

    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    pub fn stderr(&self) -> &str {
        &self.stderr
    }
}
