//! Test environment for isolated greeter runs.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Result of running the greeter CLI
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

/// Isolated test environment.
///
/// The binary runs with the project directory as its working directory and
/// `GREETER_CONFIG_HOME` pointing at an empty user config directory, with all
/// other `GREETER_*` variables cleared.
pub struct TestEnv {
    pub project_root: TempDir,
    pub config_home: TempDir,
    bin: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    pub fn new() -> Self {
        Self {
            project_root: TempDir::new().expect("Failed to create project dir"),
            config_home: TempDir::new().expect("Failed to create config home"),
            bin: PathBuf::from(env!("CARGO_BIN_EXE_greeter")),
        }
    }

    /// Get path relative to project root
    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    /// Write `./greeter.toml` in the project directory
    pub fn write_project_config(&self, content: &str) -> PathBuf {
        let path = self.project_path("greeter.toml");
        std::fs::write(&path, content).expect("Failed to write project config");
        path
    }

    /// Write `<config_home>/greeter/config.toml`
    pub fn write_user_config(&self, content: &str) -> PathBuf {
        let dir = self.config_home.path().join("greeter");
        std::fs::create_dir_all(&dir).expect("Failed to create user config dir");
        let path = dir.join("config.toml");
        std::fs::write(&path, content).expect("Failed to write user config");
        path
    }

    /// Run greeter from the project root
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    /// Run greeter from the project root with extra env vars
    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        self.run_from_with_env(self.project_root.path(), args, env_vars)
    }

    pub fn run_from_with_env(
        &self,
        cwd: &Path,
        args: &[&str],
        env_vars: &[(&str, &str)],
    ) -> TestResult {
        let mut cmd = Command::new(&self.bin);
        cmd.current_dir(cwd)
            .args(args)
            .env("GREETER_CONFIG_HOME", self.config_home.path())
            .env("NO_COLOR", "1")
            .env_remove("RUST_LOG")
            .env_remove("GREETER_NAME")
            .env_remove("GREETER_MESSAGE")
            .env_remove("GREETER_FORMAT")
            .env_remove("GREETER_VERBOSITY");

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute greeter");
        output_to_result(output)
    }
}

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}
