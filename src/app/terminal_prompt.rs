//! Prompt engine.

use tracing::{debug, info, warn};

use super::session_script::{bash_command, choice_script, text_script};
use crate::domain::{
    AnswerPattern, AppError, CacheToken, PromptOptions, PromptPlan, PromptResult,
    evaluate_unattended_choice, evaluate_unattended_pattern, is_listed_choice,
};
use crate::ports::{CacheMount, ExecutionEnvironment, TokenSource};

/// Asks one question, either from a supplied answer or through a live terminal.
///
/// Built with the `with_*` setters and consumed by [`TerminalPrompt::execute`].
pub struct TerminalPrompt<E: ExecutionEnvironment, T: TokenSource> {
    environment: E,
    tokens: T,
    options: PromptOptions,
}

impl<E: ExecutionEnvironment, T: TokenSource> TerminalPrompt<E, T> {
    pub fn new(environment: E, tokens: T) -> Self {
        Self { environment, tokens, options: PromptOptions::default() }
    }

    /// Replace every option at once.
    pub fn with_options(mut self, options: PromptOptions) -> Self {
        self.options = options;
        self
    }

    /// If true, the prompt does not wait for an operator.
    pub fn with_ci(mut self, ci: bool) -> Self {
        self.options = self.options.with_ci(ci);
        self
    }

    pub fn with_msg(mut self, msg: impl Into<String>) -> Self {
        self.options = self.options.with_msg(msg);
        self
    }

    /// Answer used when running in CI.
    pub fn with_input(mut self, input: impl Into<String>) -> Self {
        self.options = self.options.with_input(input);
        self
    }

    /// Pattern the answer is searched with when no choices are set.
    pub fn with_match(mut self, pattern: impl Into<String>) -> Self {
        self.options = self.options.with_match(pattern);
        self
    }

    pub fn with_choices<I, S>(mut self, choices: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options = self.options.with_choices(choices);
        self
    }

    /// Evaluate the prompt.
    ///
    /// An aborted session surfaces as [`AppError::Environment`], never as a
    /// declined answer.
    pub fn execute(self) -> Result<PromptResult, AppError> {
        let plan = self.options.plan()?;
        debug!(branch = plan.label(), "evaluating prompt");

        match plan {
            PromptPlan::UnattendedChoice { input, choices } => {
                Ok(evaluate_unattended_choice(input, choices))
            }
            PromptPlan::UnattendedPattern { input, pattern } => {
                warn_if_accepts_everything(&pattern);
                Ok(evaluate_unattended_pattern(input, &pattern))
            }
            PromptPlan::AttendedChoice { message, choices } => {
                self.choice_session(message, choices)
            }
            PromptPlan::AttendedPattern { message, pattern } => {
                warn_if_accepts_everything(&pattern);
                self.text_session(message, &pattern)
            }
        }
    }

    fn choice_session(&self, message: &str, choices: &[String]) -> Result<PromptResult, AppError> {
        let recorded =
            self.run_session(|mount| choice_script(message, choices, &mount.answer_path()))?;
        // Menu entries may carry their own padding; only the line ending is ours.
        let answer = recorded.trim_end_matches(['\n', '\r']).to_string();
        Ok(PromptResult::new(is_listed_choice(&answer, choices), answer))
    }

    fn text_session(
        &self,
        message: &str,
        pattern: &AnswerPattern,
    ) -> Result<PromptResult, AppError> {
        let recorded = self.run_session(|mount| text_script(message, &mount.answer_path()))?;
        let answer = recorded.trim().to_string();
        Ok(PromptResult::new(pattern.is_match(&answer), answer))
    }

    /// Mount a fresh cache, run the script with a terminal attached, and read
    /// the recorded answer back.
    ///
    /// The cache is released once it has been mounted, whether or not the
    /// session produced an answer.
    fn run_session<F>(&self, script: F) -> Result<String, AppError>
    where
        F: FnOnce(&CacheMount) -> Result<String, AppError>,
    {
        let token = self.tokens.next_token();
        let mount = self.environment.mount_cache(&token.cache_key())?;
        info!(token = %token, "starting attended session");

        let answer = self.attend(&token, &mount, script);
        if let Err(e) = self.environment.release_cache(&mount) {
            warn!(key = %mount.key, error = %e, "could not release session cache");
        }

        let answer = answer?;
        info!(token = %token, "attended session finished");
        Ok(answer)
    }

    fn attend<F>(
        &self,
        token: &CacheToken,
        mount: &CacheMount,
        script: F,
    ) -> Result<String, AppError>
    where
        F: FnOnce(&CacheMount) -> Result<String, AppError>,
    {
        let argv = bash_command(script(mount)?);
        self.environment.run_interactive(mount, &argv)?;
        self.environment.run(mount, &token.marker_command())?;

        let read_back = vec!["cat".to_string(), mount.answer_path().display().to_string()];
        self.environment.run(mount, &read_back).map_err(|e| {
            AppError::environment("read-back", format!("no answer was recorded: {e}"))
        })
    }
}

fn warn_if_accepts_everything(pattern: &AnswerPattern) {
    if pattern.accepts_everything() {
        warn!("match pattern is empty; every answer will be accepted");
    }
}
