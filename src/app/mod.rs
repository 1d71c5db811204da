pub mod api;
pub mod cli;
pub mod config;
pub mod logging;
pub mod session_script;
mod terminal_prompt;

pub use config::{ConfigFile, EnvironmentConfig, Runtime, load_config, parse_config};
pub use terminal_prompt::TerminalPrompt;
