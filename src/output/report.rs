// Wed Feb 4 2026 - Alex

use crate::aggregate::AggregateRecord;
use std::fs::File;
use std::io::Write;
use std::path::Path;

pub fn save_json_report(records: &[AggregateRecord], path: &Path) -> Result<(), std::io::Error> {
    let json_string = serde_json::to_string_pretty(records)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;

    let mut file = File::create(path)?;
    file.write_all(json_string.as_bytes())?;

    Ok(())
}

pub fn save_markdown_report(records: &[AggregateRecord], path: &Path) -> Result<(), std::io::Error> {
    let mut file = File::create(path)?;

    writeln!(file, "# Relevance by Publication Year")?;
    writeln!(file)?;
    writeln!(file, "| Year | Mean Score | Samples |")?;
    writeln!(file, "|------|------------|---------|")?;
    for record in records {
        writeln!(
            file,
            "| {} | {:.4} | {} |",
            record.year, record.mean_score, record.sample_count
        )?;
    }
    writeln!(file)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_records() -> Vec<AggregateRecord> {
        vec![
            AggregateRecord {
                year: 2020,
                mean_score: 0.5,
                sample_count: 2,
            },
            AggregateRecord {
                year: 2021,
                mean_score: 0.75,
                sample_count: 4,
            },
        ]
    }

    #[test]
    fn test_json_report_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.json");

        save_json_report(&sample_records(), &path).unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        let parsed: Vec<AggregateRecord> = serde_json::from_str(&raw).unwrap();
        assert_eq!(parsed, sample_records());
    }

    #[test]
    fn test_markdown_report_contains_table_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.md");

        save_markdown_report(&sample_records(), &path).unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(raw.contains("| Year | Mean Score | Samples |"));
        assert!(raw.contains("| 2020 | 0.5000 | 2 |"));
        assert!(raw.contains("| 2021 | 0.7500 | 4 |"));
    }
}
