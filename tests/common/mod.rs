//! Shared testing utilities for termprompt CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated working directory and cache root.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
    cache_root: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        let cache_root = root.path().join("cache");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");

        Self { root, work_dir, cache_root }
    }

    /// Directory CLI invocations run in.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Cache root handed to the local runtime.
    pub fn cache_root(&self) -> &Path {
        &self.cache_root
    }

    /// Build a command for invoking the compiled `termprompt` binary.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("termprompt").expect("Failed to locate termprompt binary");
        cmd.current_dir(self.work_dir()).env_remove("RUST_LOG");
        cmd
    }

    /// `termprompt ask --attended` on the local runtime, caching under this context.
    pub fn attended_local(&self) -> Command {
        let mut cmd = self.cli();
        cmd.args(["ask", "--attended", "--runtime", "local", "--cache-root"])
            .arg(self.cache_root());
        cmd
    }

    /// Write `termprompt.toml` into the working directory.
    pub fn write_config(&self, content: &str) -> PathBuf {
        let path = self.work_dir.join("termprompt.toml");
        fs::write(&path, content).expect("Failed to write config file");
        path
    }

    /// Names of the cache directories sessions have mounted.
    pub fn session_dirs(&self) -> Vec<String> {
        let Ok(entries) = fs::read_dir(&self.cache_root) else {
            return Vec::new();
        };
        let mut names: Vec<String> = entries
            .filter_map(|e| e.ok())
            .map(|e| e.file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }
}
