use super::fragment::ResponseFragment;
use crate::config::Config;
use crate::error::ChatError;
use crate::llm::memory::ConversationMemory;
use crate::llm::LLMClient;
use crate::storage::{InteractionLog, Turn};
use crate::tools::{calculator, expression, translation};
use log::{debug, warn};

/// Runs one turn: detect, invoke, compose, persist.
///
/// Every capability is invoked independently and its failure becomes an
/// error fragment, so the general answer, translations and math results
/// never block each other. The only state kept across turns is the
/// conversation memory and the interaction log.
pub struct TurnOrchestrator {
    llm_client: LLMClient,
    memory: ConversationMemory,
    log: InteractionLog,
}

impl TurnOrchestrator {
    pub fn new(config: &Config) -> Result<Self, ChatError> {
        Ok(Self::with_parts(
            LLMClient::new(config)?,
            ConversationMemory::new(config.memory_limit),
            InteractionLog::open(&config.log_file),
        ))
    }

    pub fn with_parts(llm_client: LLMClient, memory: ConversationMemory, log: InteractionLog) -> Self {
        TurnOrchestrator {
            llm_client,
            memory,
            log,
        }
    }

    pub async fn handle_turn(&mut self, input: &str) -> Vec<ResponseFragment> {
        // Detect
        let payloads: Vec<String> = if translation::detect(input) {
            translation::extract_payloads(input).collect()
        } else {
            Vec::new()
        };
        let expressions: Vec<String> = expression::extract(input).collect();
        debug!("Detected {} translation payload(s), {} expression(s)", payloads.len(), expressions.len());

        // Invoke
        let general = match self.llm_client.chat(input, self.memory.as_context()).await {
            Ok(answer) => ResponseFragment::general(answer),
            Err(e) => {
                warn!("General answer failed: {}", e);
                ResponseFragment::error(format!("LLM error: {}", e))
            }
        };

        let mut translations = Vec::with_capacity(payloads.len());
        for payload in &payloads {
            let fragment = match self.llm_client.translate_to_german(payload).await {
                Ok(translated) => ResponseFragment::translation(payload, &translated),
                Err(e) => ResponseFragment::error(format!("Translation error for '{}': {}", payload, e)),
            };
            translations.push(fragment);
        }

        let math = expressions.iter().map(|expr| match calculator::evaluate(expr) {
            Ok(value) => ResponseFragment::math(expr, &calculator::format_number(value)),
            Err(e) => ResponseFragment::error(format!("Math error in '{}': {}", expr, e)),
        });

        // Compose
        let mut fragments = vec![general];
        fragments.extend(translations);
        fragments.extend(math);

        // Persist
        let rendered: Vec<String> = fragments.iter().map(ResponseFragment::render).collect();
        self.memory.append(input, &rendered.join("\n"));
        if let Err(e) = self.log.append(Turn::now(input, rendered)) {
            warn!("Could not write interaction log {}: {}", self.log.path().display(), e);
        }

        fragments
    }

    pub fn memory(&self) -> &ConversationMemory {
        &self.memory
    }

    pub fn log(&self) -> &InteractionLog {
        &self.log
    }
}
