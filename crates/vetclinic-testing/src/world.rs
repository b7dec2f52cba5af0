//! TestWorld pattern for declarative integration test setup.
//!
//! Provides a fluent interface for:
//! - Creating an isolated config directory
//! - Writing a config file
//! - Pointing the CLI at a [`FakeServer`](crate::FakeServer)
//! - Executing CLI commands with proper context

use anyhow::Result;
use assert_cmd::Command;
use serde_json::Value;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Environment variables the CLI reads; cleared so the developer's own
/// setup never leaks into a test run.
const CLEARED_ENV: &[&str] = &["VETCLINIC_CONFIG", "VETCLINIC_API_BASE", "RUST_LOG"];

/// Declarative test environment builder.
///
/// # Example
/// ```no_run
/// use vetclinic_testing::{fixtures, FakeServer, TestWorld};
///
/// let server = FakeServer::start(fixtures::clinic()).unwrap();
/// let world = TestWorld::new().with_api_base(server.base_url());
///
/// let result = world.run(&["pets", "list"]).unwrap();
/// assert!(result.success());
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    config_path: PathBuf,
    api_base: Option<String>,
    format: &'static str,
    env_vars: HashMap<String, String>,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    /// Create a new isolated test environment.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let config_path = temp_dir.path().join("vetclinic").join("config.toml");

        Self {
            temp_dir,
            config_path,
            api_base: None,
            format: "plain",
            env_vars: HashMap::new(),
        }
    }

    /// Path passed as `--config`; the file only exists once written.
    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Get the temp directory root.
    pub fn temp_dir(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write the config file the CLI will load.
    pub fn with_config(self, toml: &str) -> Self {
        if let Some(parent) = self.config_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create config dir");
        }
        std::fs::write(&self.config_path, toml).expect("Failed to write config");
        self
    }

    /// Pass `--api-base` on every run.
    pub fn with_api_base(mut self, url: impl Into<String>) -> Self {
        self.api_base = Some(url.into());
        self
    }

    /// Ask for `--format json` output.
    pub fn json(mut self) -> Self {
        self.format = "json";
        self
    }

    /// Set an environment variable for CLI execution.
    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env_vars.insert(key.into(), value.into());
        self
    }

    /// Configure a CLI command with this test environment's settings.
    ///
    /// The caller must provide the base command (e.g., from `Command::cargo_bin("vetclinic")`).
    pub fn configure_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        cmd.arg("--config")
            .arg(&self.config_path)
            .arg("--format")
            .arg(self.format)
            .arg("--locale")
            .arg("iso");

        if let Some(api_base) = &self.api_base {
            cmd.arg("--api-base").arg(api_base);
        }

        cmd.current_dir(self.temp_dir.path());

        for key in CLEARED_ENV {
            cmd.env_remove(key);
        }
        for (key, value) in &self.env_vars {
            cmd.env(key, value);
        }

        cmd
    }

    /// Execute a command using the project's binary and return the result.
    pub fn run(&self, args: &[&str]) -> Result<CliResult> {
        self.run_with_stdin(args, "")
    }

    /// Execute a command feeding `stdin`, for driving the interactive shell.
    #[allow(deprecated)]
    pub fn run_with_stdin(&self, args: &[&str], stdin: &str) -> Result<CliResult> {
        let mut cmd = Command::cargo_bin("vetclinic")
            .map_err(|e| anyhow::anyhow!("Failed to find vetclinic binary: {}", e))?;

        self.configure_command(&mut cmd);
        cmd.args(args);
        cmd.write_stdin(stdin.to_string());

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
    /// Check if the command succeeded.
    pub fn success(&self) -> bool {
        self.status.success()
    }

    /// Parse stdout as a single JSON document.
    pub fn json(&self) -> Result<Value> {
        Ok(serde_json::from_str(&self.stdout)?)
    }

    /// Parse stdout as a sequence of JSON documents, one per paint or notice.
    pub fn json_documents(&self) -> Result<Vec<Value>> {
        serde_json::Deserializer::from_str(&self.stdout)
            .into_iter::<Value>()
            .map(|doc| doc.map_err(anyhow::Error::from))
            .collect()
    }

    /// Get stdout as a string.
    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    /// Get stderr as a string.
    pub fn stderr(&self) -> &str {
        &self.stderr
    }
}
