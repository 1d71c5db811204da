mod execution_environment;
mod token_source;

pub use execution_environment::{CacheMount, ExecutionEnvironment};
pub use token_source::TokenSource;
