use crate::application::ports::{LlmClient, LlmClientError};

pub const MOCK_VERIFICATION_REPLY: &str = "VALID: Yes\nFORM_TYPE: Form 1040\nCONFIDENCE: 9\nEXPLANATION: Scaffold verification reply\nISSUES: none";

/// Returns a fixed reply, or a fixed failure when built with [`MockLlmClient::failing`].
pub struct MockLlmClient {
    reply: Option<String>,
}

impl MockLlmClient {
    pub fn replying(reply: impl Into<String>) -> Self {
        Self {
            reply: Some(reply.into()),
        }
    }

    pub fn failing() -> Self {
        Self { reply: None }
    }
}

impl Default for MockLlmClient {
    fn default() -> Self {
        Self::replying(MOCK_VERIFICATION_REPLY)
    }
}

#[async_trait::async_trait]
impl LlmClient for MockLlmClient {
    async fn complete(&self, _system_prompt: &str, _prompt: &str) -> Result<String, LlmClientError> {
        self.reply
            .clone()
            .ok_or_else(|| LlmClientError::ApiRequestFailed("mock failure".to_string()))
    }
}
