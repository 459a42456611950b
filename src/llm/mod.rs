mod api_client;
pub mod memory;

use crate::config::Config;
use crate::error::ChatError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

pub use api_client::APIClient;

const ASSISTANT_PROMPT: &str = "You are a helpful assistant.";
const TRANSLATOR_PROMPT: &str = "You are a professional translator.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Message {
            role,
            content: content.into(),
        }
    }
}

/// Anything that can turn a message list into a single completion.
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    async fn complete(&self, messages: Vec<Message>) -> Result<String, ChatError>;
}

#[derive(Clone)]
pub struct LLMClient {
    backend: Arc<dyn CompletionBackend>,
}

impl LLMClient {
    pub fn new(config: &Config) -> Result<Self, ChatError> {
        Ok(Self::with_backend(Arc::new(APIClient::new(config)?)))
    }

    pub fn with_backend(backend: Arc<dyn CompletionBackend>) -> Self {
        LLMClient { backend }
    }

    pub async fn chat(&self, question: &str, context: &[Message]) -> Result<String, ChatError> {
        let mut messages = Vec::with_capacity(context.len() + 2);
        messages.push(Message::new(Role::System, ASSISTANT_PROMPT));
        messages.extend_from_slice(context);
        messages.push(Message::new(Role::User, question));

        let answer = self.backend.complete(messages).await?;
        Ok(answer.trim().to_string())
    }

    pub async fn translate_to_german(&self, text: &str) -> Result<String, ChatError> {
        let messages = vec![
            Message::new(Role::System, TRANSLATOR_PROMPT),
            Message::new(
                Role::User,
                format!("Translate the following English text to German:\n\n\"{}\"", text),
            ),
        ];

        let translated = self.backend.complete(messages).await?;
        Ok(translated.trim().to_string())
    }
}
