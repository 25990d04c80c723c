// Mon Feb 2 2026 - Alex

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub endpoints: Vec<String>,
    pub model: String,
    pub topics: Vec<String>,
    pub input_file: PathBuf,
    pub output_file: PathBuf,
    pub min_year: i32,
    pub max_year: i32,
    pub request_timeout_secs: u64,
    pub enable_progress_bars: bool,
    pub enable_verbose_output: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoints: Vec::new(),
            model: "deepseek-r1:70b".to_string(),
            topics: vec![
                "data fusion".to_string(),
                "information fusion".to_string(),
                "sensor fusion".to_string(),
                "multisource data integration".to_string(),
                "multi-modal data fusion".to_string(),
                "fusion algorithms".to_string(),
                "knowledge fusion".to_string(),
                "feature fusion".to_string(),
                "cross-modal fusion".to_string(),
                "information integration".to_string(),
                "fusion".to_string(),
                "tree".to_string(),
                "information".to_string(),
            ],
            input_file: PathBuf::from("papers.csv"),
            output_file: PathBuf::from("paper_score.csv"),
            min_year: 1980,
            max_year: 2025,
            request_timeout_secs: 600,
            enable_progress_bars: true,
            enable_verbose_output: false,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config: Config = serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse config file {}", path.display()))?;
        Ok(config)
    }

    pub fn with_endpoints(mut self, endpoints: Vec<String>) -> Self {
        self.endpoints = endpoints;
        self
    }

    pub fn with_model(mut self, model: String) -> Self {
        self.model = model;
        self
    }

    pub fn with_topics(mut self, topics: Vec<String>) -> Self {
        self.topics = topics;
        self
    }

    pub fn with_input_file(mut self, input: PathBuf) -> Self {
        self.input_file = input;
        self
    }

    pub fn with_output_file(mut self, output: PathBuf) -> Self {
        self.output_file = output;
        self
    }

    pub fn with_year_range(mut self, min_year: i32, max_year: i32) -> Self {
        self.min_year = min_year;
        self.max_year = max_year;
        self
    }

    pub fn with_request_timeout_secs(mut self, secs: u64) -> Self {
        self.request_timeout_secs = secs;
        self
    }

    // Every request carries the same query string: the topic phrases
    // collapsed with " or ".
    pub fn topic(&self) -> String {
        self.topics.join(" or ")
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.endpoints.is_empty() {
            return Err("at least one endpoint must be configured".to_string());
        }
        if self.endpoints.iter().any(|e| e.trim().is_empty()) {
            return Err("endpoint addresses must not be empty".to_string());
        }
        if self.topics.is_empty() {
            return Err("at least one topic phrase must be configured".to_string());
        }
        if self.min_year >= self.max_year {
            return Err(format!(
                "min_year {} must be below max_year {}",
                self.min_year, self.max_year
            ));
        }
        if self.request_timeout_secs == 0 {
            return Err("request_timeout_secs must be greater than 0".to_string());
        }
        Ok(())
    }
}
