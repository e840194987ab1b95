use std::sync::Arc;

use crate::application::ports::LlmClient;
use crate::domain::ValidationResult;
use crate::infrastructure::observability::sanitize_prompt;

use super::parse_verification_reply;

/// Characters of extracted text forwarded to the model.
pub const MAX_PROMPT_CONTENT_CHARS: usize = 2000;

pub const SYSTEM_PROMPT: &str = "You are a tax document verification expert. Your job is to determine if a document is a valid Form 1040. Only Form 1040 documents should be marked as valid. All other tax forms should be marked as invalid.";

/// Asks a language model whether extracted text belongs to a Form 1040.
pub struct TaxDocumentVerifier<L: ?Sized> {
    llm_client: Arc<L>,
}

impl<L> TaxDocumentVerifier<L>
where
    L: LlmClient + ?Sized,
{
    pub fn new(llm_client: Arc<L>) -> Self {
        Self { llm_client }
    }

    /// Never fails: upstream errors come back as a
    /// [`ValidationResult::service_error`] verdict.
    #[tracing::instrument(skip(self, content), fields(content_chars = content.chars().count()))]
    pub async fn verify(&self, content: &str) -> ValidationResult {
        let prompt = build_verification_prompt(content);

        match self.llm_client.complete(SYSTEM_PROMPT, &prompt).await {
            Ok(reply) => {
                tracing::debug!(reply = %sanitize_prompt(&reply), "Verification reply received");
                parse_verification_reply(reply.trim())
            }
            Err(e) => {
                tracing::error!(error = %e, "Verification call failed");
                ValidationResult::service_error(e)
            }
        }
    }
}

pub fn build_verification_prompt(content: &str) -> String {
    let excerpt: String = content.chars().take(MAX_PROMPT_CONTENT_CHARS).collect();

    format!(
        "Analyze the following extracted content from a tax document and determine if it's a valid Form 1040.

IMPORTANT: Only Form 1040 documents should be considered valid. All other tax forms (W-2, 1099, etc.) should be marked as invalid.

Please provide:
1. Is this a valid Form 1040? (Yes/No)
2. What type of document is this? (e.g., Form 1040, W-2, 1099, etc.)
3. Confidence level (1-10, where 10 is highest)
4. Brief explanation of your assessment
5. Any notable issues or missing information

Extracted content:
{excerpt}

Respond in this exact format:
VALID: Yes/No
FORM_TYPE: [form type]
CONFIDENCE: [1-10]
EXPLANATION: [your explanation]
ISSUES: [any issues found]"
    )
}
