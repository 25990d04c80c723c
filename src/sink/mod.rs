// Mon Feb 2 2026 - Alex

pub mod error;

pub use error::SinkError;

use parking_lot::Mutex;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

// Append-only result log, one "id,year,score" line per processed item.
// Lines accumulate across runs: rerunning a batch against the same file
// appends every line again (no dedup by id).
pub struct FileSink {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileSink {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    // One atomic line append: open, write, flush, close, all under the
    // sink lock. Concurrent slots never interleave partial lines.
    pub fn append(&self, id: u64, year: i32, score: f64) -> Result<(), SinkError> {
        let _guard = self.lock.lock();

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        writeln!(file, "{},{},{}", id, year, score)?;
        file.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_append_writes_one_line_per_call() {
        let dir = tempfile::tempdir().unwrap();
        let sink = FileSink::new(dir.path().join("scores.csv"));

        sink.append(0, 2020, 0.5).unwrap();
        sink.append(1, 2021, -1.0).unwrap();

        let contents = std::fs::read_to_string(sink.path()).unwrap();
        assert_eq!(contents, "0,2020,0.5\n1,2021,-1\n");
    }

    #[test]
    fn test_concurrent_appends_never_interleave() {
        let dir = tempfile::tempdir().unwrap();
        let sink = Arc::new(FileSink::new(dir.path().join("scores.csv")));

        let writers = 4;
        let lines_per_writer = 500;

        let handles: Vec<_> = (0..writers)
            .map(|w| {
                let sink = sink.clone();
                thread::spawn(move || {
                    for i in 0..lines_per_writer {
                        let id = (w * lines_per_writer + i) as u64;
                        sink.append(id, 2020, 0.25).unwrap();
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        let contents = std::fs::read_to_string(sink.path()).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), writers * lines_per_writer);

        for line in lines {
            let fields: Vec<&str> = line.split(',').collect();
            assert_eq!(fields.len(), 3);
            fields[0].parse::<u64>().unwrap();
            fields[1].parse::<i32>().unwrap();
            fields[2].parse::<f64>().unwrap();
        }
    }

    #[test]
    fn test_rerun_appends_again() {
        let dir = tempfile::tempdir().unwrap();
        let sink = FileSink::new(dir.path().join("scores.csv"));

        for _ in 0..2 {
            sink.append(0, 2020, 0.5).unwrap();
            sink.append(1, 2021, 0.8).unwrap();
        }

        let contents = std::fs::read_to_string(sink.path()).unwrap();
        assert_eq!(contents.lines().count(), 4);
    }
}
