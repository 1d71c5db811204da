//! Configuration file loading.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::adapters::{DEFAULT_IMAGE, DockerEnvironment, LocalShellEnvironment};
use crate::domain::{AppError, PromptOptions};
use crate::ports::ExecutionEnvironment;

/// File picked up from the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "termprompt.toml";

/// Contents of `termprompt.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    #[serde(default)]
    pub prompt: PromptOptions,
    #[serde(default)]
    pub environment: EnvironmentConfig,
}

/// Where attended sessions run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Runtime {
    /// Throwaway container with a named cache volume.
    #[default]
    Docker,
    /// Host shell with a cache directory.
    Local,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EnvironmentConfig {
    #[serde(default)]
    pub runtime: Runtime,
    /// Container image, docker runtime only.
    #[serde(default = "default_image")]
    pub image: String,
    /// Cache directory root, local runtime only.
    #[serde(default)]
    pub cache_root: Option<PathBuf>,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self { runtime: Runtime::default(), image: default_image(), cache_root: None }
    }
}

fn default_image() -> String {
    DEFAULT_IMAGE.to_string()
}

impl EnvironmentConfig {
    /// Build the execution environment this configuration describes.
    pub fn build(&self) -> Box<dyn ExecutionEnvironment> {
        match self.runtime {
            Runtime::Docker => Box::new(DockerEnvironment::new(self.image.clone())),
            Runtime::Local => match &self.cache_root {
                Some(root) => Box::new(LocalShellEnvironment::new(root.clone())),
                None => Box::new(LocalShellEnvironment::default()),
            },
        }
    }
}

pub fn parse_config(content: &str) -> Result<ConfigFile, AppError> {
    Ok(toml::from_str(content)?)
}

/// Load the config file.
///
/// An explicit `path` must exist. Without one, `termprompt.toml` in `dir` is
/// used when present, and defaults otherwise.
pub fn load_config(path: Option<&Path>, dir: &Path) -> Result<ConfigFile, AppError> {
    let candidate = match path {
        Some(path) if !path.is_file() => {
            return Err(AppError::ConfigFileMissing(path.display().to_string()));
        }
        Some(path) => path.to_path_buf(),
        None => {
            let fallback = dir.join(DEFAULT_CONFIG_FILE);
            if !fallback.is_file() {
                debug!("no config file, using defaults");
                return Ok(ConfigFile::default());
            }
            fallback
        }
    };

    debug!(path = %candidate.display(), "loading config file");
    let content = fs::read_to_string(&candidate)?;
    parse_config(&content)
}
