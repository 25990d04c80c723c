// Tue Feb 3 2026 - Alex

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScorerError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("API error: {0}")]
    Api(String),
    #[error("response has no score= marker")]
    MissingScoreMarker,
    #[error("invalid score literal: {0:?}")]
    InvalidScoreLiteral(String),
}
