use crate::error::ChatError;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_ENDPOINT_URL: &str = "https://api.groq.com/openai/v1/chat/completions";
pub const DEFAULT_MODEL: &str = "llama3-8b-8192";
pub const DEFAULT_MEMORY_LIMIT: usize = 10;
pub const DEFAULT_LOG_FILE: &str = "interaction_log.json";
const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_MAX_RETRIES: u32 = 2;

#[derive(Clone)]
pub struct Config {
    pub api_key: String,
    pub endpoint_url: String,
    pub model_name: String,
    pub memory_limit: usize,
    pub log_file: PathBuf,
    pub request_timeout: Duration,
    pub max_retries: u32,
}

impl Config {
    pub fn from_env() -> Result<Self, ChatError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ChatError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let api_key = get("GROQ_API_KEY")
            .ok_or_else(|| ChatError::Config("GROQ_API_KEY not found in environment or key.env".to_string()))?;

        let memory_limit = parse_or(get("CHATBOT_MEMORY_LIMIT"), "CHATBOT_MEMORY_LIMIT", DEFAULT_MEMORY_LIMIT)?;
        if memory_limit == 0 {
            return Err(ChatError::Config("CHATBOT_MEMORY_LIMIT must be at least 1".to_string()));
        }

        let timeout_secs = parse_or(get("CHATBOT_TIMEOUT_SECS"), "CHATBOT_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS)?;
        if timeout_secs == 0 {
            return Err(ChatError::Config("CHATBOT_TIMEOUT_SECS must be at least 1".to_string()));
        }

        Ok(Config {
            api_key,
            endpoint_url: get("CHATBOT_ENDPOINT_URL").unwrap_or_else(|| DEFAULT_ENDPOINT_URL.to_string()),
            model_name: get("CHATBOT_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            memory_limit,
            log_file: get("CHATBOT_LOG_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE)),
            request_timeout: Duration::from_secs(timeout_secs),
            max_retries: parse_or(get("CHATBOT_MAX_RETRIES"), "CHATBOT_MAX_RETRIES", DEFAULT_MAX_RETRIES)?,
        })
    }
}

// Keeps the key out of debug output.
impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"<redacted>")
            .field("endpoint_url", &self.endpoint_url)
            .field("model_name", &self.model_name)
            .field("memory_limit", &self.memory_limit)
            .field("log_file", &self.log_file)
            .field("request_timeout", &self.request_timeout)
            .field("max_retries", &self.max_retries)
            .finish()
    }
}

fn parse_or<T: std::str::FromStr>(value: Option<String>, key: &str, default: T) -> Result<T, ChatError> {
    match value {
        Some(raw) => raw
            .parse::<T>()
            .map_err(|_| ChatError::Config(format!("{} has invalid value '{}'", key, raw))),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup(&[("GROQ_API_KEY", "secret")])).unwrap();
        assert_eq!(config.api_key, "secret");
        assert_eq!(config.endpoint_url, DEFAULT_ENDPOINT_URL);
        assert_eq!(config.model_name, DEFAULT_MODEL);
        assert_eq!(config.memory_limit, 10);
        assert_eq!(config.log_file, PathBuf::from("interaction_log.json"));
        assert_eq!(config.request_timeout, Duration::from_secs(30));
        assert_eq!(config.max_retries, 2);
    }

    #[test]
    fn test_missing_api_key() {
        let err = Config::from_lookup(lookup(&[])).unwrap_err();
        assert!(matches!(err, ChatError::Config(_)));

        let err = Config::from_lookup(lookup(&[("GROQ_API_KEY", "   ")])).unwrap_err();
        assert!(matches!(err, ChatError::Config(_)));
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("GROQ_API_KEY", "secret"),
            ("CHATBOT_ENDPOINT_URL", "http://localhost:11434/v1/chat/completions"),
            ("CHATBOT_MODEL", "qwen2.5:14b"),
            ("CHATBOT_MEMORY_LIMIT", "3"),
            ("CHATBOT_LOG_FILE", "/tmp/chat.json"),
            ("CHATBOT_TIMEOUT_SECS", "5"),
            ("CHATBOT_MAX_RETRIES", "0"),
        ]))
        .unwrap();
        assert_eq!(config.endpoint_url, "http://localhost:11434/v1/chat/completions");
        assert_eq!(config.model_name, "qwen2.5:14b");
        assert_eq!(config.memory_limit, 3);
        assert_eq!(config.log_file, PathBuf::from("/tmp/chat.json"));
        assert_eq!(config.request_timeout, Duration::from_secs(5));
        assert_eq!(config.max_retries, 0);
    }

    #[test]
    fn test_invalid_numbers() {
        let err = Config::from_lookup(lookup(&[("GROQ_API_KEY", "k"), ("CHATBOT_MEMORY_LIMIT", "ten")])).unwrap_err();
        assert!(err.to_string().contains("CHATBOT_MEMORY_LIMIT"));

        let err = Config::from_lookup(lookup(&[("GROQ_API_KEY", "k"), ("CHATBOT_MEMORY_LIMIT", "0")])).unwrap_err();
        assert!(matches!(err, ChatError::Config(_)));

        let err = Config::from_lookup(lookup(&[("GROQ_API_KEY", "k"), ("CHATBOT_TIMEOUT_SECS", "0")])).unwrap_err();
        assert!(matches!(err, ChatError::Config(_)));
    }

    #[test]
    fn test_debug_redacts_key() {
        let config = Config::from_lookup(lookup(&[("GROQ_API_KEY", "super-secret")])).unwrap();
        assert!(!format!("{:?}", config).contains("super-secret"));
    }
}
