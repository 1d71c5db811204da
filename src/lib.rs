//! termprompt: ask an operator a question that behaves the same in CI and at a live terminal.
//!
//! In CI mode the supplied answer is evaluated locally. In attended mode the
//! question runs as a shell script inside an [`ports::ExecutionEnvironment`]
//! with the operator's terminal attached, and every session mounts a cache
//! under a freshly minted key so a previous answer is never replayed.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use adapters::{ClockTokenSource, DockerEnvironment, LocalShellEnvironment};
pub use app::api::execute_prompt;
pub use app::{ConfigFile, EnvironmentConfig, Runtime, TerminalPrompt, load_config};
pub use domain::{AppError, PromptOptions, PromptResult};
pub use ports::{CacheMount, ExecutionEnvironment, TokenSource};
