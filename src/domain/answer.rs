use regex::Regex;

use super::error::AppError;

/// Compiled free-text match rule.
///
/// Matching is a search: the pattern may hit anywhere in the answer. Anchor
/// it with `^...$` to require a full match. An empty pattern accepts every
/// answer.
#[derive(Debug, Clone)]
pub struct AnswerPattern {
    regex: Regex,
}

impl AnswerPattern {
    pub fn compile(pattern: &str) -> Result<Self, AppError> {
        let regex = Regex::new(pattern).map_err(|source| AppError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;
        Ok(Self { regex })
    }

    /// True when the pattern accepts anything, including the empty answer.
    pub fn accepts_everything(&self) -> bool {
        self.regex.as_str().is_empty()
    }

    pub fn is_match(&self, answer: &str) -> bool {
        self.regex.is_match(answer)
    }
}

/// Exact, case-sensitive membership of `answer` in `choices`.
pub fn is_listed_choice(answer: &str, choices: &[String]) -> bool {
    choices.iter().any(|choice| choice == answer)
}
