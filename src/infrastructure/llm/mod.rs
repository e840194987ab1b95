mod mock_llm_client;
mod openai_client;

pub use mock_llm_client::{MOCK_VERIFICATION_REPLY, MockLlmClient};
pub use openai_client::{
    DEFAULT_BASE_URL, DEFAULT_CHAT_MODEL, DEFAULT_MAX_TOKENS, DEFAULT_TEMPERATURE, OpenAiClient,
};
