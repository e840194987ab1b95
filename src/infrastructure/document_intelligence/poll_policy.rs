use std::time::Duration;

pub const DEFAULT_MAX_POLL_ATTEMPTS: u32 = 30;
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(2);

/// How long to keep polling a running analysis.
///
/// The ceiling counts non-terminal polls, not elapsed time: slow individual
/// requests push the total wait above `max_attempts * interval`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollPolicy {
    pub max_attempts: u32,
    pub interval: Duration,
}

impl PollPolicy {
    pub fn new(max_attempts: u32, interval: Duration) -> Self {
        Self {
            max_attempts,
            interval,
        }
    }
}

impl Default for PollPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_POLL_ATTEMPTS, DEFAULT_POLL_INTERVAL)
    }
}
