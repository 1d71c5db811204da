use std::fs;
use std::path::PathBuf;
use std::process::Command;

use tracing::info;

use super::process::{attach, capture, split_program};
use crate::domain::AppError;
use crate::ports::{CacheMount, ExecutionEnvironment};

/// Runs sessions directly on the host.
///
/// Each cache key maps to a directory below `cache_root`; commands run with
/// that directory as their working directory.
#[derive(Debug, Clone)]
pub struct LocalShellEnvironment {
    cache_root: PathBuf,
}

impl LocalShellEnvironment {
    pub fn new(cache_root: impl Into<PathBuf>) -> Self {
        Self { cache_root: cache_root.into() }
    }

    fn command(
        &self,
        mount: &CacheMount,
        argv: &[String],
        operation: &str,
    ) -> Result<Command, AppError> {
        let (program, args) = split_program(argv, operation)?;
        let mut command = Command::new(program);
        command.args(args).current_dir(&mount.path);
        Ok(command)
    }
}

impl Default for LocalShellEnvironment {
    fn default() -> Self {
        Self::new(std::env::temp_dir().join("termprompt"))
    }
}

impl ExecutionEnvironment for LocalShellEnvironment {
    fn mount_cache(&self, key: &str) -> Result<CacheMount, AppError> {
        if key.is_empty() || key.contains(['/', '\\']) || key == "." || key == ".." {
            return Err(AppError::environment(
                "mount_cache",
                format!("cache key '{key}' is not a valid directory name"),
            ));
        }

        let path = self.cache_root.join(key);
        fs::create_dir_all(&path).map_err(|e| {
            AppError::environment("mount_cache", format!("cannot create {}: {e}", path.display()))
        })?;

        info!(key, path = %path.display(), "mounted cache directory");
        Ok(CacheMount { key: key.to_string(), handle: path.display().to_string(), path })
    }

    fn run(&self, mount: &CacheMount, argv: &[String]) -> Result<String, AppError> {
        capture(self.command(mount, argv, "run")?, "run")
    }

    fn run_interactive(&self, mount: &CacheMount, argv: &[String]) -> Result<(), AppError> {
        attach(self.command(mount, argv, "run_interactive")?, "run_interactive")
    }

    fn release_cache(&self, mount: &CacheMount) -> Result<(), AppError> {
        match fs::remove_dir_all(&mount.path) {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => {
                return Err(AppError::environment(
                    "release_cache",
                    format!("cannot remove {}: {e}", mount.path.display()),
                ));
            }
        }
        info!(key = %mount.key, "removed cache directory");
        Ok(())
    }
}
