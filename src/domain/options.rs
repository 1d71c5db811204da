//! Prompt configuration value.

use serde::Deserialize;

use super::answer::AnswerPattern;
use super::error::AppError;
use super::plan::PromptPlan;

pub const DEFAULT_MESSAGE: &str = "Continue? (y/n)";
pub const DEFAULT_MATCH: &str = "y";

/// Configuration for a single prompt.
///
/// Every setter consumes the value and returns the updated one, so a
/// configuration is never mutated behind a caller's back. Cross-field
/// consistency is not checked here; [`PromptOptions::plan`] decides which
/// answer shape is active.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PromptOptions {
    /// Evaluate without a live terminal.
    #[serde(default = "default_true")]
    pub ci: bool,
    /// Message shown to the operator. Ignored when `ci` is set.
    #[serde(default = "default_msg")]
    pub msg: String,
    /// Answer used when `ci` is set.
    #[serde(default)]
    pub input: String,
    /// Search pattern applied when `choices` is empty.
    #[serde(rename = "match", default = "default_match")]
    pub pattern: String,
    /// Literal answers accepted in choice mode.
    #[serde(default)]
    pub choices: Vec<String>,
}

impl Default for PromptOptions {
    fn default() -> Self {
        Self {
            ci: default_true(),
            msg: default_msg(),
            input: String::new(),
            pattern: default_match(),
            choices: Vec::new(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_msg() -> String {
    DEFAULT_MESSAGE.to_string()
}

fn default_match() -> String {
    DEFAULT_MATCH.to_string()
}

impl PromptOptions {
    /// Replace every field at once.
    pub fn new(
        ci: bool,
        msg: impl Into<String>,
        input: impl Into<String>,
        pattern: impl Into<String>,
        choices: Vec<String>,
    ) -> Self {
        Self { ci, msg: msg.into(), input: input.into(), pattern: pattern.into(), choices }
    }

    pub fn with_ci(mut self, ci: bool) -> Self {
        self.ci = ci;
        self
    }

    pub fn with_msg(mut self, msg: impl Into<String>) -> Self {
        self.msg = msg.into();
        self
    }

    pub fn with_input(mut self, input: impl Into<String>) -> Self {
        self.input = input.into();
        self
    }

    pub fn with_match(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = pattern.into();
        self
    }

    pub fn with_choices<I, S>(mut self, choices: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.choices = choices.into_iter().map(Into::into).collect();
        self
    }

    /// Resolve the configuration into exactly one evaluation branch.
    ///
    /// Choice mode wins whenever `choices` is non-empty; the pattern is then
    /// neither compiled nor consulted.
    pub fn plan(&self) -> Result<PromptPlan<'_>, AppError> {
        let plan = match (self.ci, self.choices.is_empty()) {
            (true, false) => {
                PromptPlan::UnattendedChoice { input: &self.input, choices: &self.choices }
            }
            (true, true) => PromptPlan::UnattendedPattern {
                input: &self.input,
                pattern: AnswerPattern::compile(&self.pattern)?,
            },
            (false, false) => {
                PromptPlan::AttendedChoice { message: &self.msg, choices: &self.choices }
            }
            (false, true) => PromptPlan::AttendedPattern {
                message: &self.msg,
                pattern: AnswerPattern::compile(&self.pattern)?,
            },
        };
        Ok(plan)
    }
}
