//! Evaluation branches of a prompt.
//!
//! A prompt is either unattended or attended, and its answer is either
//! picked from a list or matched against a pattern. Each combination gets
//! its own variant so every branch can be exercised on its own.

use super::answer::{AnswerPattern, is_listed_choice};
use super::result::PromptResult;

#[derive(Debug, Clone)]
pub enum PromptPlan<'a> {
    UnattendedChoice { input: &'a str, choices: &'a [String] },
    UnattendedPattern { input: &'a str, pattern: AnswerPattern },
    AttendedChoice { message: &'a str, choices: &'a [String] },
    AttendedPattern { message: &'a str, pattern: AnswerPattern },
}

impl PromptPlan<'_> {
    pub fn label(&self) -> &'static str {
        match self {
            PromptPlan::UnattendedChoice { .. } => "unattended-choice",
            PromptPlan::UnattendedPattern { .. } => "unattended-pattern",
            PromptPlan::AttendedChoice { .. } => "attended-choice",
            PromptPlan::AttendedPattern { .. } => "attended-pattern",
        }
    }
}

pub fn evaluate_unattended_choice(input: &str, choices: &[String]) -> PromptResult {
    PromptResult::new(is_listed_choice(input, choices), input)
}

pub fn evaluate_unattended_pattern(input: &str, pattern: &AnswerPattern) -> PromptResult {
    PromptResult::new(pattern.is_match(input), input)
}
