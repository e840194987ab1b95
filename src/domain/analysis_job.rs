use std::fmt;

use chrono::{DateTime, Utc};

/// Opaque reference to an in-flight remote analysis, as handed back by the
/// submission call. For Azure Document Intelligence this is the
/// `Operation-Location` URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobHandle(String);

impl JobHandle {
    pub fn new(handle: impl Into<String>) -> Self {
        Self(handle.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for JobHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisJobStatus {
    Pending,
    Succeeded,
    Failed,
    TimedOut,
}

impl AnalysisJobStatus {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, AnalysisJobStatus::Pending)
    }
}

/// Poll-loop bookkeeping for one submitted document. Lives only for the
/// duration of a single analysis call and is never persisted.
#[derive(Debug, Clone)]
pub struct AnalysisJob {
    pub handle: JobHandle,
    pub submitted_at: DateTime<Utc>,
    pub attempts: u32,
    pub status: AnalysisJobStatus,
}

impl AnalysisJob {
    pub fn new(handle: JobHandle) -> Self {
        Self {
            handle,
            submitted_at: Utc::now(),
            attempts: 0,
            status: AnalysisJobStatus::Pending,
        }
    }

    /// Records a non-terminal poll. Returns `true` while the attempt ceiling
    /// has not been reached; once it has, the job is marked timed out.
    pub fn record_pending_poll(&mut self, max_attempts: u32) -> bool {
        self.attempts += 1;
        if self.attempts >= max_attempts {
            self.status = AnalysisJobStatus::TimedOut;
            false
        } else {
            true
        }
    }
}
