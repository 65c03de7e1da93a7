use std::env;
use secrecy::SecretString;

use crate::models::domain::heuristics::HeuristicConfig;

#[derive(Clone, Debug)]
pub struct Config {
    pub web_server_host: String,
    pub web_server_port: u16,
    pub openai_api_key: SecretString,
    pub openai_api_base: String,
    pub openai_model: String,
    pub completion_timeout_secs: u64,
    pub heuristic_preset: String,
    pub shuffle_seed: Option<u64>,
    pub cors_allowed_origins: Vec<String>,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "127.0.0.1".to_string()),
            web_server_port: env::var("WEB_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            openai_api_key: SecretString::from(env::var("OPENAI_API_KEY").unwrap_or_default()),
            openai_api_base: env::var("OPENAI_API_BASE")
                .unwrap_or_else(|_| "https://api.openai.com/v1".to_string()),
            openai_model: env::var("OPENAI_MODEL").unwrap_or_else(|_| "gpt-3.5-turbo".to_string()),
            completion_timeout_secs: env::var("COMPLETION_TIMEOUT_SECS")
                .ok()
                .and_then(|t| t.parse().ok())
                .unwrap_or(60),
            heuristic_preset: env::var("HEURISTIC_PRESET").unwrap_or_else(|_| "cloze".to_string()),
            shuffle_seed: env::var("SHUFFLE_SEED").ok().and_then(|s| s.parse().ok()),
            cors_allowed_origins: env::var("CORS_ALLOWED_ORIGINS")
                .map(|origins| parse_origins(&origins))
                .unwrap_or_else(|_| {
                    vec![
                        "http://localhost:5500".to_string(),
                        "http://127.0.0.1:5500".to_string(),
                    ]
                }),
        }
    }

    /// Resolves the named heuristic preset, falling back to the cloze preset
    /// for unknown names.
    pub fn heuristics(&self) -> HeuristicConfig {
        let config = match HeuristicConfig::preset(&self.heuristic_preset) {
            Some(config) => config,
            None => {
                log::warn!(
                    "Unknown HEURISTIC_PRESET '{}', using 'cloze'",
                    self.heuristic_preset
                );
                HeuristicConfig::cloze()
            }
        };
        config.with_shuffle_seed(self.shuffle_seed)
    }

    /// Reports configuration that leaves the AI path permanently on fallback content.
    /// Returns the list of problems found; empty means ready.
    pub fn validate_for_production(&self) -> Vec<String> {
        use secrecy::ExposeSecret;

        let mut problems = Vec::new();

        if self.openai_api_key.expose_secret().trim().is_empty() {
            problems.push(
                "OPENAI_API_KEY is not set; AI generation will always return fallback content"
                    .to_string(),
            );
        }

        if self.completion_timeout_secs == 0 {
            problems.push("COMPLETION_TIMEOUT_SECS must be greater than zero".to_string());
        }

        problems
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8080,
            openai_api_key: SecretString::from("test_api_key".to_string()),
            openai_api_base: "http://localhost:9999/v1".to_string(),
            openai_model: "gpt-3.5-turbo".to_string(),
            completion_timeout_secs: 5,
            heuristic_preset: "cloze".to_string(),
            shuffle_seed: Some(7),
            cors_allowed_origins: vec!["http://localhost:5500".to_string()],
        }
    }
}

fn parse_origins(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect()
}
