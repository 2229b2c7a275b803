use std::time::Duration;

/// Exponential backoff: the wait before attempt `n` is `2^(n-1) * base`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackoffPolicy {
    base: Duration,
}

impl BackoffPolicy {
    pub const fn exponential(base: Duration) -> Self {
        Self { base }
    }

    /// Delay before the 1-based `attempt`. The first attempt never waits.
    pub fn delay_before(&self, attempt: u32) -> Option<Duration> {
        if attempt <= 1 {
            return None;
        }
        let factor = 2u32.saturating_pow(attempt - 1);
        Some(self.base.saturating_mul(factor))
    }
}

/// How many times an entry point calls the API and how long it waits between calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub backoff: Option<BackoffPolicy>,
}

impl RetryPolicy {
    pub const SIDEBAR_MAX_ATTEMPTS: u32 = 5;
    pub const SIDEBAR_BACKOFF_BASE: Duration = Duration::from_millis(1000);

    /// Five attempts, waiting 2s, 4s, 8s and 16s between them.
    pub fn sidebar() -> Self {
        Self {
            max_attempts: Self::SIDEBAR_MAX_ATTEMPTS,
            backoff: Some(BackoffPolicy::exponential(Self::SIDEBAR_BACKOFF_BASE)),
        }
    }

    /// A single attempt; failures surface immediately.
    pub fn none() -> Self {
        Self {
            max_attempts: 1,
            backoff: None,
        }
    }

    pub fn retries(&self) -> bool {
        self.max_attempts > 1
    }

    pub fn delay_before(&self, attempt: u32) -> Option<Duration> {
        self.backoff.and_then(|b| b.delay_before(attempt))
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::sidebar()
    }
}
