pub mod answer;
pub mod cache_token;
pub mod error;
pub mod options;
pub mod plan;
pub mod result;

pub use answer::{AnswerPattern, is_listed_choice};
pub use cache_token::CacheToken;
pub use error::AppError;
pub use options::PromptOptions;
pub use plan::{PromptPlan, evaluate_unattended_choice, evaluate_unattended_pattern};
pub use result::PromptResult;
