mod fake_environment;
mod sequence_tokens;

pub use fake_environment::FakeEnvironment;
pub use sequence_tokens::SequenceTokens;
