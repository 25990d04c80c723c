// Tue Feb 3 2026 - Alex

pub mod client;
pub mod error;
pub mod extract;

pub use client::OllamaClient;
pub use error::ScorerError;

use crate::dispatch::pool::Endpoint;
use crate::source::WorkItem;
use std::time::Duration;

// Reserved score marking an item whose score could not be determined.
// Never a legal model score; excluded from aggregation.
pub const INVALID_SCORE: f64 = -1.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreResult {
    pub id: u64,
    pub year: i32,
    pub score: f64,
}

impl ScoreResult {
    pub fn invalid(id: u64, year: i32) -> Self {
        Self {
            id,
            year,
            score: INVALID_SCORE,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.score >= 0.0
    }
}

pub struct Scorer {
    client: OllamaClient,
    topic: String,
}

impl Scorer {
    pub fn new(model: String, topic: String, timeout: Duration) -> Result<Self, ScorerError> {
        Ok(Self {
            client: OllamaClient::new(model, timeout)?,
            topic,
        })
    }

    // Failure of any kind stays inside this call: the item comes back
    // with INVALID_SCORE and the reason goes to the log.
    pub fn score(&self, item: &WorkItem, endpoint: &Endpoint) -> ScoreResult {
        match self.try_score(item, endpoint) {
            Ok(score) => ScoreResult {
                id: item.id,
                year: item.year,
                score,
            },
            Err(e) => {
                log::warn!(
                    "scoring failed for {:?} via {}: {}",
                    item.title,
                    endpoint.address,
                    e
                );
                ScoreResult::invalid(item.id, item.year)
            }
        }
    }

    fn try_score(&self, item: &WorkItem, endpoint: &Endpoint) -> Result<f64, ScorerError> {
        let prompt = build_prompt(&item.abstract_text, &self.topic);
        let response = self.client.chat(&endpoint.address, &prompt)?;
        extract::extract_score(&response)
    }
}

fn build_prompt(abstract_text: &str, topic: &str) -> String {
    format!(
        "You are an expert in scientific research and information analysis.\n\
         Analyze the following paper abstract and determine the strength of its association with the topic \"{topic}\".\n\
         Provide a detailed explanation of the relevance, including specific points of connection or lack thereof.\n\n\
         Abstract:\n{abstract_text}\n\n\
         Topic: {topic}\n\
         Any word or phrase related to the above should be considered relevant. \
         Give me a float score from 0 to 1, 0 means no relevance, 1 means highly relevant.\n\
         The format is:\n**score=0.8**",
        topic = topic,
        abstract_text = abstract_text,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_item() -> WorkItem {
        WorkItem {
            id: 7,
            abstract_text: "We study multi-modal sensor fusion.".to_string(),
            year: 2020,
            title: "A fusion paper".to_string(),
        }
    }

    fn test_scorer() -> Scorer {
        Scorer::new(
            "test-model".to_string(),
            "data fusion".to_string(),
            Duration::from_secs(5),
        )
        .unwrap()
    }

    #[test]
    fn test_prompt_embeds_abstract_and_topic() {
        let prompt = build_prompt("An abstract body.", "data fusion or tree");
        assert!(prompt.contains("An abstract body."));
        assert!(prompt.contains("topic \"data fusion or tree\""));
        assert!(prompt.contains("**score=0.8**"));
    }

    #[test]
    fn test_score_round_trip() {
        let mut server = mockito::Server::new();
        let _mock = server
            .mock("POST", "/api/chat")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"message":{"role":"assistant","content":"Strongly related.\n**score=0.73**"}}"#,
            )
            .create();

        let endpoint = Endpoint::new(server.url());
        let result = test_scorer().score(&test_item(), &endpoint);

        assert_eq!(result.id, 7);
        assert_eq!(result.year, 2020);
        assert_eq!(result.score, 0.73);
        assert!(result.is_valid());
    }

    #[test]
    fn test_http_error_becomes_invalid_score() {
        let mut server = mockito::Server::new();
        let _mock = server
            .mock("POST", "/api/chat")
            .with_status(500)
            .with_body(r#"{"error":"model not loaded"}"#)
            .create();

        let endpoint = Endpoint::new(server.url());
        let result = test_scorer().score(&test_item(), &endpoint);

        assert_eq!(result.score, INVALID_SCORE);
        assert!(!result.is_valid());
    }

    #[test]
    fn test_markerless_response_becomes_invalid_score() {
        let mut server = mockito::Server::new();
        let _mock = server
            .mock("POST", "/api/chat")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"message":{"role":"assistant","content":"I cannot rate this."}}"#)
            .create();

        let endpoint = Endpoint::new(server.url());
        let result = test_scorer().score(&test_item(), &endpoint);

        assert_eq!(result.score, INVALID_SCORE);
    }

    #[test]
    fn test_unreachable_endpoint_becomes_invalid_score() {
        let endpoint = Endpoint::new("http://127.0.0.1:9".to_string());
        let result = test_scorer().score(&test_item(), &endpoint);

        assert_eq!(result.score, INVALID_SCORE);
    }
}
