// Tue Feb 3 2026 - Alex

use crate::scorer::error::ScorerError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    stream: bool,
}

#[derive(Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Deserialize)]
struct ChatResponse {
    message: ChatMessage,
}

#[derive(Deserialize)]
struct ApiErrorBody {
    error: String,
}

pub struct OllamaClient {
    http: reqwest::blocking::Client,
    model: String,
}

impl OllamaClient {
    pub fn new(model: String, timeout: Duration) -> Result<Self, ScorerError> {
        let http = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()?;
        Ok(Self { http, model })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    // One blocking chat round-trip against a single endpoint; returns
    // the assistant message body.
    pub fn chat(&self, base_url: &str, prompt: &str) -> Result<String, ScorerError> {
        let url = format!("{}/api/chat", base_url.trim_end_matches('/'));

        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: prompt.to_string(),
            }],
            stream: false,
        };

        let response = self.http.post(&url).json(&request).send()?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            let detail = serde_json::from_str::<ApiErrorBody>(&body)
                .map(|e| e.error)
                .unwrap_or(body);
            return Err(ScorerError::Api(format!("{} from {}: {}", status, url, detail)));
        }

        let parsed: ChatResponse = response.json()?;
        Ok(parsed.message.content)
    }
}
