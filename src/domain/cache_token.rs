use std::fmt;

const CACHE_KEY_PREFIX: &str = "termprompt-";

/// Never-reused identifier for one attended session.
///
/// The execution environment replays results for a repeated cache key, so
/// each session mints its own token and derives both the cache key and the
/// no-op read-back marker from it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheToken(String);

impl CacheToken {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Key under which the session's cache location is mounted.
    pub fn cache_key(&self) -> String {
        format!("{CACHE_KEY_PREFIX}{}", self.0)
    }

    /// Trivial command embedding the token, run before reading the answer back.
    pub fn marker_command(&self) -> Vec<String> {
        vec!["sh".to_string(), "-c".to_string(), format!(": {} && exit 0", self.0)]
    }
}

impl fmt::Display for CacheToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
