//! Shared testing utilities for venvgen CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

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

    /// Path to the working directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled `venvgen` binary.
    ///
    /// Gemini credentials and endpoint overrides are stripped so tests never
    /// pick up the developer's environment.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("venvgen").expect("Failed to locate venvgen binary");
        cmd.current_dir(&self.work_dir)
            .env_remove("GEMINI_API_KEY")
            .env_remove("GEMINI_API_URL")
            .env_remove("GEMINI_MODEL");
        cmd
    }

    /// Read a file from the working directory.
    pub fn read_file(&self, name: &str) -> String {
        fs::read_to_string(self.work_dir.join(name)).expect("Failed to read generated file")
    }

    /// Whether a file exists in the working directory.
    pub fn has_file(&self, name: &str) -> bool {
        self.work_dir.join(name).exists()
    }
}
