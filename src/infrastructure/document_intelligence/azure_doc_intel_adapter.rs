use std::time::Duration;

use async_trait::async_trait;
use base64::{Engine as _, engine::general_purpose};
use reqwest::{Client, StatusCode};
use serde::Deserialize;

use crate::application::ports::{CancelSignal, DocumentAnalyzer, DocumentAnalyzerError, JobResult};
use crate::domain::{AnalysisJob, AnalysisJobStatus, JobHandle, ModelDescriptor};

use super::PollPolicy;

pub const API_VERSION: &str = "2024-11-30";
pub const DEFAULT_MODEL_ID: &str = "prebuilt-tax.us.1040";
pub const SUBSCRIPTION_KEY_HEADER: &str = "Ocp-Apim-Subscription-Key";
pub const OPERATION_LOCATION_HEADER: &str = "Operation-Location";
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

pub struct AzureDocIntelAdapter {
    client: Client,
    endpoint: String,
    api_key: String,
    model_id: String,
    api_version: String,
    poll_policy: PollPolicy,
}

impl AzureDocIntelAdapter {
    pub fn new(endpoint: &str, api_key: &str) -> Result<Self, DocumentAnalyzerError> {
        Self::with_request_timeout(endpoint, api_key, DEFAULT_REQUEST_TIMEOUT)
    }

    pub fn with_request_timeout(
        endpoint: &str,
        api_key: &str,
        request_timeout: Duration,
    ) -> Result<Self, DocumentAnalyzerError> {
        let client = Client::builder()
            .timeout(request_timeout)
            .build()
            .map_err(|e| DocumentAnalyzerError::RequestFailed(e.to_string()))?;
        Ok(Self {
            client,
            endpoint: endpoint.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            model_id: DEFAULT_MODEL_ID.to_string(),
            api_version: API_VERSION.to_string(),
            poll_policy: PollPolicy::default(),
        })
    }

    pub fn with_model(mut self, model_id: impl Into<String>) -> Self {
        self.model_id = model_id.into();
        self
    }

    pub fn with_api_version(mut self, api_version: impl Into<String>) -> Self {
        self.api_version = api_version.into();
        self
    }

    pub fn with_poll_policy(mut self, poll_policy: PollPolicy) -> Self {
        self.poll_policy = poll_policy;
        self
    }

    pub fn poll_policy(&self) -> PollPolicy {
        self.poll_policy
    }

    fn analyze_url(&self) -> String {
        format!(
            "{}/documentintelligence/documentModels/{}:analyze?_overload=analyzeDocument&api-version={}",
            self.endpoint, self.model_id, self.api_version
        )
    }

    async fn submit(&self, data: &[u8]) -> Result<JobHandle, DocumentAnalyzerError> {
        let body = serde_json::json!({ "base64Source": general_purpose::STANDARD.encode(data) });

        let response = self
            .client
            .post(self.analyze_url())
            .header(SUBSCRIPTION_KEY_HEADER, &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| DocumentAnalyzerError::RequestFailed(format!("submit: {e}")))?;

        if response.status() != StatusCode::ACCEPTED {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(DocumentAnalyzerError::SubmissionRejected { status, body });
        }

        response
            .headers()
            .get(OPERATION_LOCATION_HEADER)
            .and_then(|v| v.to_str().ok())
            .filter(|v| !v.is_empty())
            .map(JobHandle::new)
            .ok_or(DocumentAnalyzerError::MissingJobHandle)
    }

    async fn poll_once(
        &self,
        handle: &JobHandle,
    ) -> Result<(AnalyzeOperation, serde_json::Value), DocumentAnalyzerError> {
        let response = self
            .client
            .get(handle.as_str())
            .header(SUBSCRIPTION_KEY_HEADER, &self.api_key)
            .send()
            .await
            .map_err(|e| DocumentAnalyzerError::RequestFailed(format!("poll: {e}")))?;

        if response.status() != StatusCode::OK {
            return Err(DocumentAnalyzerError::PollError {
                status: response.status().as_u16(),
            });
        }

        let payload: serde_json::Value = response
            .json()
            .await
            .map_err(|e| DocumentAnalyzerError::InvalidResponse(e.to_string()))?;
        let operation = AnalyzeOperation::deserialize(&payload)
            .map_err(|e| DocumentAnalyzerError::InvalidResponse(e.to_string()))?;

        Ok((operation, payload))
    }

    async fn poll_until_complete(
        &self,
        job: &mut AnalysisJob,
        cancel: &mut CancelSignal,
    ) -> Result<JobResult, DocumentAnalyzerError> {
        loop {
            let (operation, payload) = tokio::select! {
                biased;
                _ = cancel.cancelled() => return Err(DocumentAnalyzerError::Cancelled),
                polled = self.poll_once(&job.handle) => polled?,
            };

            match operation.status.as_str() {
                "succeeded" => {
                    job.status = AnalysisJobStatus::Succeeded;
                    let content = operation.extracted_content();
                    return Ok(JobResult { payload, content });
                }
                "failed" => {
                    job.status = AnalysisJobStatus::Failed;
                    let message = operation
                        .error
                        .and_then(|e| e.message)
                        .unwrap_or_else(|| "Unknown error".to_string());
                    return Err(DocumentAnalyzerError::AnalysisFailed(message));
                }
                other => {
                    if !job.record_pending_poll(self.poll_policy.max_attempts) {
                        return Err(DocumentAnalyzerError::AnalysisTimedOut {
                            attempts: job.attempts,
                        });
                    }
                    tracing::debug!(
                        status = other,
                        attempt = job.attempts,
                        "Analysis still running"
                    );
                    tokio::select! {
                        biased;
                        _ = cancel.cancelled() => return Err(DocumentAnalyzerError::Cancelled),
                        _ = tokio::time::sleep(self.poll_policy.interval) => {}
                    }
                }
            }
        }
    }
}

#[async_trait]
impl DocumentAnalyzer for AzureDocIntelAdapter {
    #[tracing::instrument(
        skip(self, data, cancel),
        fields(model_id = %self.model_id, bytes = data.len())
    )]
    async fn submit_and_await(
        &self,
        data: &[u8],
        mut cancel: CancelSignal,
    ) -> Result<JobResult, DocumentAnalyzerError> {
        if cancel.is_cancelled() {
            return Err(DocumentAnalyzerError::Cancelled);
        }

        let handle = self.submit(data).await?;
        tracing::debug!(handle = %handle, "Analysis submitted");

        let mut job = AnalysisJob::new(handle);
        let result = self.poll_until_complete(&mut job, &mut cancel).await;

        let elapsed_ms = (chrono::Utc::now() - job.submitted_at).num_milliseconds();
        if job.status.is_terminal() {
            tracing::info!(
                status = ?job.status,
                attempts = job.attempts,
                elapsed_ms,
                "Analysis finished"
            );
        } else {
            tracing::warn!(
                attempts = job.attempts,
                elapsed_ms,
                "Analysis abandoned before a terminal status"
            );
        }

        result
    }

    #[tracing::instrument(skip(self))]
    async fn list_models(&self) -> Result<Vec<ModelDescriptor>, DocumentAnalyzerError> {
        let url = format!(
            "{}/documentintelligence/documentModels?api-version={}",
            self.endpoint, self.api_version
        );

        let response = self
            .client
            .get(&url)
            .header(SUBSCRIPTION_KEY_HEADER, &self.api_key)
            .send()
            .await
            .map_err(|e| DocumentAnalyzerError::RequestFailed(format!("list models: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(DocumentAnalyzerError::RequestFailed(format!(
                "list models returned {status}: {text}"
            )));
        }

        let models: ModelList = response
            .json()
            .await
            .map_err(|e| DocumentAnalyzerError::InvalidResponse(e.to_string()))?;

        Ok(models.value)
    }
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeOperation {
    pub status: String,
    #[serde(rename = "analyzeResult")]
    pub analyze_result: Option<AnalyzeResult>,
    pub error: Option<OperationError>,
}

impl AnalyzeOperation {
    /// Extracted text, empty when the result or its content is missing or null.
    pub fn extracted_content(self) -> String {
        self.analyze_result
            .and_then(|r| r.content)
            .unwrap_or_default()
    }
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeResult {
    #[serde(default)]
    pub content: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct OperationError {
    pub code: Option<String>,
    pub message: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ModelList {
    #[serde(default)]
    pub value: Vec<ModelDescriptor>,
}
