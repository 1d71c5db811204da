use super::config::EnvironmentConfig;
use super::terminal_prompt::TerminalPrompt;
use crate::adapters::ClockTokenSource;
use crate::domain::{AppError, PromptOptions, PromptResult};

/// Evaluate `options`, opening an attended session in `environment` when
/// `options.ci` is false.
pub fn execute_prompt(
    options: PromptOptions,
    environment: &EnvironmentConfig,
) -> Result<PromptResult, AppError> {
    TerminalPrompt::new(environment.build(), ClockTokenSource::new())
        .with_options(options)
        .execute()
}
