use async_openai::{config::OpenAIConfig, Client};
use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde_json::{json, Value};

use crate::config::Config;
use crate::errors::CompletionError;

#[derive(Clone, Debug, PartialEq)]
pub struct CompletionRequest {
    pub system: Option<String>,
    pub prompt: String,
    pub max_tokens: u32,
    pub temperature: f32,
}

impl CompletionRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            system: None,
            prompt: prompt.into(),
            max_tokens: 1024,
            temperature: 0.7,
        }
    }

    pub fn with_system(mut self, system: impl Into<String>) -> Self {
        self.system = Some(system.into());
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }
}

/// The external text-completion service. Returns the model's reply text.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(&self, request: CompletionRequest) -> Result<String, CompletionError>;
}

/// Chat-completions client for OpenAI-compatible endpoints.
pub struct OpenAiCompletionClient {
    client: Client<OpenAIConfig>,
    model: String,
    api_key: SecretString,
}

impl OpenAiCompletionClient {
    pub fn new(config: &Config) -> Self {
        let openai_config = OpenAIConfig::new()
            .with_api_key(config.openai_api_key.expose_secret())
            .with_api_base(&config.openai_api_base);

        Self {
            client: Client::with_config(openai_config),
            model: config.openai_model.clone(),
            api_key: config.openai_api_key.clone(),
        }
    }

    fn request_body(&self, request: &CompletionRequest) -> Value {
        let mut messages = Vec::with_capacity(2);
        if let Some(system) = &request.system {
            messages.push(json!({ "role": "system", "content": system }));
        }
        messages.push(json!({ "role": "user", "content": request.prompt }));

        json!({
            "model": self.model,
            "messages": messages,
            "max_tokens": request.max_tokens,
            "temperature": request.temperature,
        })
    }
}

#[async_trait]
impl CompletionClient for OpenAiCompletionClient {
    async fn complete(&self, request: CompletionRequest) -> Result<String, CompletionError> {
        if self.api_key.expose_secret().trim().is_empty() {
            return Err(CompletionError::NotConfigured(
                "OPENAI_API_KEY is empty".to_string(),
            ));
        }

        log::info!(
            "Calling completion model {} (max_tokens={}, temperature={})",
            self.model,
            request.max_tokens,
            request.temperature
        );

        let response: Value = self
            .client
            .chat()
            .create_byot(self.request_body(&request))
            .await?;

        let content = extract_content(&response).ok_or(CompletionError::EmptyReply)?;
        log::info!("Completion reply received, length: {}", content.len());
        Ok(content)
    }
}

/// Pulls `choices[0].message.content` out of a chat-completions response.
pub fn extract_content(response: &Value) -> Option<String> {
    response
        .pointer("/choices/0/message/content")
        .and_then(Value::as_str)
        .filter(|content| !content.trim().is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_builder_sets_fields() {
        let request = CompletionRequest::new("hello")
            .with_system("be terse")
            .with_max_tokens(10)
            .with_temperature(0.1);

        assert_eq!(request.prompt, "hello");
        assert_eq!(request.system.as_deref(), Some("be terse"));
        assert_eq!(request.max_tokens, 10);
    }

    #[test]
    fn request_body_puts_system_message_first() {
        let client = OpenAiCompletionClient::new(&Config::test_config());
        let body = client.request_body(&CompletionRequest::new("prompt").with_system("sys"));

        assert_eq!(body["model"], "gpt-3.5-turbo");
        assert_eq!(body["messages"][0]["role"], "system");
        assert_eq!(body["messages"][1]["content"], "prompt");
    }

    #[test]
    fn request_body_omits_missing_system_message() {
        let client = OpenAiCompletionClient::new(&Config::test_config());
        let body = client.request_body(&CompletionRequest::new("prompt"));

        assert_eq!(body["messages"].as_array().map(Vec::len), Some(1));
    }

    #[test]
    fn extract_content_reads_first_choice() {
        let response = json!({
            "choices": [{ "message": { "role": "assistant", "content": "[1, 2]" } }]
        });
        assert_eq!(extract_content(&response), Some("[1, 2]".to_string()));
    }

    #[test]
    fn extract_content_rejects_blank_or_missing_content() {
        assert_eq!(extract_content(&json!({ "choices": [] })), None);
        assert_eq!(
            extract_content(&json!({ "choices": [{ "message": { "content": "  " } }] })),
            None
        );
    }

    #[tokio::test]
    async fn empty_api_key_is_not_configured() {
        let mut config = Config::test_config();
        config.openai_api_key = SecretString::from(String::new());
        let client = OpenAiCompletionClient::new(&config);

        let result = client.complete(CompletionRequest::new("hi")).await;
        assert!(matches!(result, Err(CompletionError::NotConfigured(_))));
    }
}
