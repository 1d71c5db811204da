mod clock_token_source;
mod docker_environment;
mod local_shell_environment;
pub(crate) mod process;

pub use clock_token_source::ClockTokenSource;
pub use docker_environment::{DEFAULT_IMAGE, DockerEnvironment};
pub use local_shell_environment::LocalShellEnvironment;
