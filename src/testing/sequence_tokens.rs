use std::sync::atomic::{AtomicUsize, Ordering};

use crate::domain::CacheToken;
use crate::ports::TokenSource;

/// Deterministic tokens: `token-0`, `token-1`, ...
///
/// [`SequenceTokens::repeating`] hands out the same token forever, to
/// exercise what a stale key does.
pub struct SequenceTokens {
    next: AtomicUsize,
    fixed: Option<String>,
}

impl SequenceTokens {
    pub fn new() -> Self {
        Self { next: AtomicUsize::new(0), fixed: None }
    }

    pub fn repeating(token: &str) -> Self {
        Self { next: AtomicUsize::new(0), fixed: Some(token.to_string()) }
    }
}

impl TokenSource for SequenceTokens {
    fn next_token(&self) -> CacheToken {
        match &self.fixed {
            Some(token) => CacheToken::new(token.clone()),
            None => CacheToken::new(format!("token-{}", self.next.fetch_add(1, Ordering::SeqCst))),
        }
    }
}
