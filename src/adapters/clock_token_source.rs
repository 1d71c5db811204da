use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Utc;

use crate::domain::CacheToken;
use crate::ports::TokenSource;

static SEQUENCE: AtomicU64 = AtomicU64::new(0);

/// Wall-clock token source.
///
/// Tokens combine the current time in nanoseconds, the process id, and a
/// process-wide sequence number, so two calls within one clock tick still differ.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClockTokenSource;

impl ClockTokenSource {
    pub fn new() -> Self {
        Self
    }
}

impl TokenSource for ClockTokenSource {
    fn next_token(&self) -> CacheToken {
        let now = Utc::now();
        let sequence = SEQUENCE.fetch_add(1, Ordering::Relaxed);
        CacheToken::new(format!(
            "{}.{:09}-{}-{}",
            now.timestamp(),
            now.timestamp_subsec_nanos(),
            std::process::id(),
            sequence
        ))
    }
}
