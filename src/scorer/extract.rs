// Tue Feb 3 2026 - Alex

use crate::scorer::error::ScorerError;
use once_cell::sync::Lazy;
use regex::Regex;

// Matches "score=<literal>**" where the literal is a float in [0, 1]:
// 0, 1, 1.0, 0.73 or .73, with at most 8 fractional digits. The capture
// is structurally shorter than 10 characters.
static SCORE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"score=\s*(1(?:\.0{1,8})?|0(?:\.\d{1,8})?|\.\d{1,8})\s*\*\*").unwrap()
});

pub fn extract_score(response: &str) -> Result<f64, ScorerError> {
    if !response.contains("score=") {
        return Err(ScorerError::MissingScoreMarker);
    }

    // Reasoning models restate the requested format while thinking out
    // loud; the last well-formed occurrence is the final answer.
    let capture = SCORE_RE
        .captures_iter(response)
        .last()
        .and_then(|c| c.get(1))
        .ok_or_else(|| ScorerError::InvalidScoreLiteral(fragment_after_marker(response)))?;

    capture
        .as_str()
        .parse::<f64>()
        .map_err(|_| ScorerError::InvalidScoreLiteral(capture.as_str().to_string()))
}

fn fragment_after_marker(response: &str) -> String {
    let after = response.rsplit("score=").next().unwrap_or("");
    let fragment = after.split("**").next().unwrap_or(after);
    fragment.chars().take(32).collect()
}
