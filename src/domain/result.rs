use serde::Serialize;

/// Outcome of a prompt: whether the answer was accepted, and the answer itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PromptResult {
    pub outcome: bool,
    pub input: String,
}

impl PromptResult {
    pub fn new(outcome: bool, input: impl Into<String>) -> Self {
        Self { outcome, input: input.into() }
    }
}
