use super::{CompletionBackend, Message};
use crate::config::Config;
use crate::error::ChatError;
use async_trait::async_trait;
use log::{debug, warn};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

const RETRY_BACKOFF: Duration = Duration::from_millis(500);

#[derive(Clone)]
pub struct APIClient {
    client: Client,
    endpoint_url: String,
    model: String,
    api_key: String,
    max_retries: u32,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: &'a [Message],
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: String,
}

impl APIClient {
    pub fn new(config: &Config) -> Result<Self, ChatError> {
        let client = Client::builder().timeout(config.request_timeout).build()?;

        Ok(APIClient {
            client,
            endpoint_url: config.endpoint_url.clone(),
            model: config.model_name.clone(),
            api_key: config.api_key.clone(),
            max_retries: config.max_retries,
        })
    }

    async fn send_once(&self, request: &ChatRequest<'_>) -> Result<String, ChatError> {
        let response = self.client
            .post(&self.endpoint_url)
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ChatError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        // Body read failures stay transport errors so they can be retried
        let body = response.bytes().await?;
        let parsed = serde_json::from_slice::<ChatResponse>(&body)
            .map_err(|e| ChatError::MalformedResponse(e.to_string()))?;

        parsed
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content.trim().to_string())
            .ok_or_else(|| ChatError::MalformedResponse("response contained no choices".to_string()))
    }
}

#[async_trait]
impl CompletionBackend for APIClient {
    async fn complete(&self, messages: Vec<Message>) -> Result<String, ChatError> {
        let request = ChatRequest {
            model: &self.model,
            messages: &messages,
        };

        let mut attempt = 0;
        loop {
            debug!("POST {} ({} messages, attempt {})", self.endpoint_url, messages.len(), attempt + 1);
            match self.send_once(&request).await {
                // Only transport failures are retried; HTTP error statuses are final
                Err(ChatError::Transport(e)) if attempt < self.max_retries && is_transient(&e) => {
                    attempt += 1;
                    warn!("Request to {} failed ({}), retrying ({}/{})", self.endpoint_url, e, attempt, self.max_retries);
                    tokio::time::sleep(RETRY_BACKOFF * attempt).await;
                }
                result => return result,
            }
        }
    }
}

// Connect failures, timeouts and connections dropped mid-request or mid-body
fn is_transient(err: &reqwest::Error) -> bool {
    err.is_timeout() || err.is_connect() || err.is_request() || err.is_body()
}
