use std::path::PathBuf;

use crate::domain::AppError;

/// Storage location obtained from [`ExecutionEnvironment::mount_cache`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheMount {
    /// Key the location was mounted under.
    pub key: String,
    /// Path at which commands run through the environment see the location.
    pub path: PathBuf,
    /// Environment-specific handle (volume name, host directory, ...).
    pub handle: String,
}

impl CacheMount {
    /// Fixed file the session scripts write the captured answer to.
    pub fn answer_path(&self) -> PathBuf {
        self.path.join("input")
    }
}

/// Port for the environment prompt sessions run in.
///
/// Identical cache keys may be served from a cached snapshot, so callers
/// must mint a fresh key per session.
pub trait ExecutionEnvironment {
    /// Obtain a storage location scoped by `key`.
    fn mount_cache(&self, key: &str) -> Result<CacheMount, AppError>;

    /// Run a command to completion and return its standard output.
    ///
    /// Fails when the command exits non-zero.
    fn run(&self, mount: &CacheMount, argv: &[String]) -> Result<String, AppError>;

    /// Run a command with the operator's terminal attached.
    ///
    /// Blocks until the session ends.
    fn run_interactive(&self, mount: &CacheMount, argv: &[String]) -> Result<(), AppError>;

    /// Discard the location once its session is over.
    fn release_cache(&self, mount: &CacheMount) -> Result<(), AppError>;
}

impl<E: ExecutionEnvironment + ?Sized> ExecutionEnvironment for &E {
    fn mount_cache(&self, key: &str) -> Result<CacheMount, AppError> {
        (**self).mount_cache(key)
    }

    fn run(&self, mount: &CacheMount, argv: &[String]) -> Result<String, AppError> {
        (**self).run(mount, argv)
    }

    fn run_interactive(&self, mount: &CacheMount, argv: &[String]) -> Result<(), AppError> {
        (**self).run_interactive(mount, argv)
    }

    fn release_cache(&self, mount: &CacheMount) -> Result<(), AppError> {
        (**self).release_cache(mount)
    }
}

impl<E: ExecutionEnvironment + ?Sized> ExecutionEnvironment for Box<E> {
    fn mount_cache(&self, key: &str) -> Result<CacheMount, AppError> {
        (**self).mount_cache(key)
    }

    fn run(&self, mount: &CacheMount, argv: &[String]) -> Result<String, AppError> {
        (**self).run(mount, argv)
    }

    fn run_interactive(&self, mount: &CacheMount, argv: &[String]) -> Result<(), AppError> {
        (**self).run_interactive(mount, argv)
    }

    fn release_cache(&self, mount: &CacheMount) -> Result<(), AppError> {
        (**self).release_cache(mount)
    }
}
