//! Shared testing utilities for pitchkit CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A complete profile used across CLI exercises.
pub const ACME_PROFILE: &str = r#"company = "Acme"
product = "Widgets"
target_audience = "SMBs"
top_problems = "cost, speed"
value_proposition = "half the price"
tone = "Bold"
"#;

/// Testing harness providing an isolated working directory for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");

        Self { root, work_dir }
    }

    /// Path to the workspace directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled `pitchkit` binary.
    ///
    /// The backend credential is stripped so tests control it explicitly.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("pitchkit").expect("Failed to locate pitchkit binary");
        cmd.current_dir(&self.work_dir).env_remove("OPENAI_API_KEY");
        cmd
    }

    /// Write the standard complete profile and return its path.
    pub fn write_profile(&self) -> PathBuf {
        self.write_profile_content(ACME_PROFILE)
    }

    /// Write an arbitrary profile file and return its path.
    pub fn write_profile_content(&self, content: &str) -> PathBuf {
        let path = self.work_dir.join("profile.toml");
        fs::write(&path, content).expect("Failed to write profile file");
        path
    }

    /// Write a persona YAML file and return its path.
    pub fn write_personas(&self, content: &str) -> PathBuf {
        let path = self.work_dir.join("personas.yml");
        fs::write(&path, content).expect("Failed to write persona file");
        path
    }

    /// Write a `pitchkit.toml` in the working directory.
    pub fn write_config(&self, content: &str) {
        fs::write(self.work_dir.join("pitchkit.toml"), content)
            .expect("Failed to write config file");
    }
}
