use std::path::PathBuf;
use std::process::Command;

use tracing::info;

use super::process::{attach, capture, split_program};
use crate::domain::AppError;
use crate::ports::{CacheMount, ExecutionEnvironment};

pub const DEFAULT_IMAGE: &str = "bash";
const CONTAINER_MOUNT_POINT: &str = "/tmp/prompt";

/// Runs sessions in throwaway containers through the docker CLI.
///
/// Each cache key maps to a named volume mounted at `/tmp/prompt`.
#[derive(Debug, Clone)]
pub struct DockerEnvironment {
    binary: String,
    image: String,
}

impl DockerEnvironment {
    pub fn new(image: impl Into<String>) -> Self {
        Self { binary: "docker".to_string(), image: image.into() }
    }

    /// Use a docker-compatible CLI other than `docker` (e.g. `podman`).
    pub fn with_binary(mut self, binary: impl Into<String>) -> Self {
        self.binary = binary.into();
        self
    }

    fn container(
        &self,
        mount: &CacheMount,
        argv: &[String],
        interactive: bool,
        operation: &str,
    ) -> Result<Command, AppError> {
        let (program, args) = split_program(argv, operation)?;
        let mut command = Command::new(&self.binary);
        command.args(["run", "--rm"]);
        if interactive {
            command.arg("-it");
        }
        command
            .arg("-v")
            .arg(format!("{}:{}", mount.handle, mount.path.display()))
            .arg(&self.image)
            .arg(program)
            .args(args);
        Ok(command)
    }
}

impl Default for DockerEnvironment {
    fn default() -> Self {
        Self::new(DEFAULT_IMAGE)
    }
}

impl ExecutionEnvironment for DockerEnvironment {
    fn mount_cache(&self, key: &str) -> Result<CacheMount, AppError> {
        let mut command = Command::new(&self.binary);
        command.args(["volume", "create", key]);
        let volume = capture(command, "mount_cache")?.trim().to_string();
        if volume.is_empty() {
            return Err(AppError::environment("mount_cache", "volume create returned no name"));
        }

        info!(key, volume = %volume, "mounted cache volume");
        Ok(CacheMount {
            key: key.to_string(),
            path: PathBuf::from(CONTAINER_MOUNT_POINT),
            handle: volume,
        })
    }

    fn run(&self, mount: &CacheMount, argv: &[String]) -> Result<String, AppError> {
        let command = self.container(mount, argv, false, "run")?;
        capture(command, "run")
    }

    fn run_interactive(&self, mount: &CacheMount, argv: &[String]) -> Result<(), AppError> {
        let command = self.container(mount, argv, true, "run_interactive")?;
        attach(command, "run_interactive")
    }

    fn release_cache(&self, mount: &CacheMount) -> Result<(), AppError> {
        let mut command = Command::new(&self.binary);
        command.args(["volume", "rm", "--force", &mount.handle]);
        capture(command, "release_cache")?;
        info!(key = %mount.key, volume = %mount.handle, "removed cache volume");
        Ok(())
    }
}
