// Mon Feb 2 2026 - Alex

pub mod error;

pub use error::SourceError;

use serde::Deserialize;
use std::path::Path;

// One record to score. Immutable once read; `id` is the row index in
// the input file and stays stable across reruns of the same file.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkItem {
    pub id: u64,
    pub abstract_text: String,
    pub year: i32,
    pub title: String,
}

#[derive(Debug, Deserialize)]
struct PaperRow {
    #[serde(rename = "Abstract")]
    abstract_text: String,
    #[serde(rename = "Year")]
    year: String,
    #[serde(rename = "TITLE")]
    title: String,
}

pub struct CsvSource;

impl CsvSource {
    pub fn load(path: &Path) -> Result<Vec<WorkItem>, SourceError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_path(path)?;

        let mut items = Vec::new();

        for (index, record) in reader.deserialize::<PaperRow>().enumerate() {
            let id = index as u64;

            let row = match record {
                Ok(row) => row,
                Err(e) => {
                    log::warn!("skipping row {}: {}", id, e);
                    continue;
                }
            };

            let year = match parse_year(&row.year) {
                Some(year) => year,
                None => {
                    log::warn!(
                        "skipping row {} ({}): unparseable year {:?}",
                        id,
                        row.title,
                        row.year
                    );
                    continue;
                }
            };

            items.push(WorkItem {
                id,
                abstract_text: row.abstract_text,
                year,
                title: row.title,
            });
        }

        Ok(items)
    }
}

// Year cells show up both as integers and as float renderings ("2020.0").
fn parse_year(raw: &str) -> Option<i32> {
    let trimmed = raw.trim();
    if let Ok(year) = trimmed.parse::<i32>() {
        return Some(year);
    }
    trimmed.parse::<f64>().ok().map(|y| y as i32)
}
