use async_trait::async_trait;
use tokio::sync::watch;

use crate::domain::ModelDescriptor;

/// Terminal payload of a successful remote analysis.
#[derive(Debug, Clone, PartialEq)]
pub struct JobResult {
    /// Full job document as returned by the last poll.
    pub payload: serde_json::Value,
    /// Plain text extracted from the payload, empty when the service produced none.
    pub content: String,
}

#[async_trait]
pub trait DocumentAnalyzer: Send + Sync {
    /// Submits `data` for analysis and waits for a terminal outcome.
    async fn submit_and_await(
        &self,
        data: &[u8],
        cancel: CancelSignal,
    ) -> Result<JobResult, DocumentAnalyzerError>;

    async fn list_models(&self) -> Result<Vec<ModelDescriptor>, DocumentAnalyzerError>;
}

#[derive(Debug, thiserror::Error)]
pub enum DocumentAnalyzerError {
    #[error("submission accepted without a job handle")]
    MissingJobHandle,
    #[error("submission rejected with status {status}: {body}")]
    SubmissionRejected { status: u16, body: String },
    #[error("analysis failed: {0}")]
    AnalysisFailed(String),
    #[error("poll request returned status {status}")]
    PollError { status: u16 },
    #[error("analysis did not finish after {attempts} polls")]
    AnalysisTimedOut { attempts: u32 },
    #[error("analysis cancelled")]
    Cancelled,
    #[error("request failed: {0}")]
    RequestFailed(String),
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

/// Receiving side of a cancellation request for a running analysis.
#[derive(Debug, Clone)]
pub struct CancelSignal(Option<watch::Receiver<bool>>);

/// Sending side of a [`CancelSignal`]. Dropping it without calling
/// [`CancelHandle::cancel`] leaves the signal untriggered.
#[derive(Debug)]
pub struct CancelHandle(watch::Sender<bool>);

impl CancelSignal {
    pub fn new() -> (CancelHandle, CancelSignal) {
        let (tx, rx) = watch::channel(false);
        (CancelHandle(tx), CancelSignal(Some(rx)))
    }

    /// A signal that never fires.
    pub fn never() -> Self {
        Self(None)
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.as_ref().is_some_and(|rx| *rx.borrow())
    }

    /// Resolves once cancellation has been requested; pends forever otherwise.
    pub async fn cancelled(&mut self) {
        let Some(rx) = self.0.as_mut() else {
            return std::future::pending().await;
        };

        loop {
            if *rx.borrow_and_update() {
                return;
            }
            if rx.changed().await.is_err() {
                return std::future::pending().await;
            }
        }
    }
}

impl Default for CancelSignal {
    fn default() -> Self {
        Self::never()
    }
}

impl CancelHandle {
    pub fn cancel(&self) {
        self.0.send_replace(true);
    }
}
