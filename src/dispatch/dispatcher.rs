// Tue Feb 3 2026 - Alex

use crate::dispatch::pool::EndpointPool;
use crate::dispatch::worker::{ScoreWorker, ScoreWorkerPool};
use crate::scorer::{ScoreResult, Scorer};
use crate::sink::FileSink;
use crate::source::WorkItem;
use crate::ui::progress::ProgressBar;
use crate::utils::logging::ScopedTimer;
use std::collections::VecDeque;
use std::sync::mpsc;
use std::sync::Arc;

pub struct Dispatcher {
    pool: EndpointPool,
    scorer: Arc<Scorer>,
    sink: Arc<FileSink>,
    show_progress: bool,
}

impl Dispatcher {
    pub fn new(pool: EndpointPool, scorer: Arc<Scorer>, sink: Arc<FileSink>) -> Self {
        assert!(!pool.is_empty(), "endpoint pool must not be empty");
        Self {
            pool,
            scorer,
            sink,
            show_progress: true,
        }
    }

    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    pub fn endpoint_count(&self) -> usize {
        self.pool.len()
    }

    // Runs the whole batch to completion. Every input item yields
    // exactly one result; results arrive in completion order.
    pub fn run(&self, items: Vec<WorkItem>) -> Vec<ScoreResult> {
        let total = items.len();
        if total == 0 {
            return Vec::new();
        }

        let _timer = ScopedTimer::new("dispatch");

        let mut queues: Vec<VecDeque<WorkItem>> =
            (0..self.pool.len()).map(|_| VecDeque::new()).collect();
        for (index, item) in items.into_iter().enumerate() {
            queues[self.pool.assign(index)].push_back(item);
        }

        let (sender, receiver) = mpsc::channel();

        let workers: Vec<ScoreWorker> = queues
            .into_iter()
            .enumerate()
            .map(|(slot, queue)| {
                ScoreWorker::new(
                    slot,
                    self.pool.endpoints()[slot].clone(),
                    queue,
                    self.scorer.clone(),
                    self.sink.clone(),
                    sender.clone(),
                )
            })
            .collect();
        drop(sender);

        let mut worker_pool = ScoreWorkerPool::new(workers);
        worker_pool.start();

        let progress = if self.show_progress {
            ProgressBar::new(total as u64).with_message("Scoring abstracts")
        } else {
            ProgressBar::hidden(total as u64)
        };

        let mut results = Vec::with_capacity(total);
        for result in receiver.iter() {
            log::debug!(
                "item {} year {} score {}",
                result.id,
                result.year,
                result.score
            );
            progress.increment(1);
            results.push(result);
        }

        progress.finish_with_message("Scoring complete");
        worker_pool.join();

        if results.len() != total {
            log::error!("expected {} results, received {}", total, results.len());
        }

        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scorer::INVALID_SCORE;
    use std::time::Duration;

    fn chat_body(score: &str) -> String {
        format!(
            r#"{{"message":{{"role":"assistant","content":"**score={}**"}}}}"#,
            score
        )
    }

    fn test_items(count: usize) -> Vec<WorkItem> {
        (0..count)
            .map(|i| WorkItem {
                id: i as u64,
                abstract_text: format!("abstract {}", i),
                year: 2000 + i as i32,
                title: format!("paper {}", i),
            })
            .collect()
    }

    fn test_scorer() -> Arc<Scorer> {
        Arc::new(
            Scorer::new(
                "test-model".to_string(),
                "data fusion".to_string(),
                Duration::from_secs(5),
            )
            .unwrap(),
        )
    }

    #[test]
    fn test_run_yields_one_result_and_one_sink_line_per_item() {
        let mut server_a = mockito::Server::new();
        let mut server_b = mockito::Server::new();
        let _mock_a = server_a
            .mock("POST", "/api/chat")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(chat_body("0.5"))
            .create();
        let _mock_b = server_b
            .mock("POST", "/api/chat")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(chat_body("0.5"))
            .create();

        let dir = tempfile::tempdir().unwrap();
        let sink_path = dir.path().join("scores.csv");
        let sink = Arc::new(FileSink::new(sink_path.clone()));

        let pool = EndpointPool::from_addresses(&[server_a.url(), server_b.url()]);
        let dispatcher = Dispatcher::new(pool, test_scorer(), sink).with_progress(false);

        let results = dispatcher.run(test_items(5));

        assert_eq!(results.len(), 5);
        assert!(results.iter().all(|r| r.score == 0.5));

        let mut ids: Vec<u64> = results.iter().map(|r| r.id).collect();
        ids.sort_unstable();
        assert_eq!(ids, vec![0, 1, 2, 3, 4]);

        let contents = std::fs::read_to_string(&sink_path).unwrap();
        assert_eq!(contents.lines().count(), 5);
    }

    #[test]
    fn test_unreachable_endpoint_still_completes_the_batch() {
        let dir = tempfile::tempdir().unwrap();
        let sink_path = dir.path().join("scores.csv");
        let sink = Arc::new(FileSink::new(sink_path.clone()));

        let pool = EndpointPool::from_addresses(&["http://127.0.0.1:9".to_string()]);
        let dispatcher = Dispatcher::new(pool, test_scorer(), sink).with_progress(false);

        let results = dispatcher.run(test_items(3));

        assert_eq!(results.len(), 3);
        assert!(results.iter().all(|r| r.score == INVALID_SCORE));

        let contents = std::fs::read_to_string(&sink_path).unwrap();
        assert_eq!(contents.lines().count(), 3);
    }

    #[test]
    fn test_run_with_no_items_returns_empty() {
        let dir = tempfile::tempdir().unwrap();
        let sink = Arc::new(FileSink::new(dir.path().join("scores.csv")));
        let pool = EndpointPool::from_addresses(&["http://127.0.0.1:9".to_string()]);
        let dispatcher = Dispatcher::new(pool, test_scorer(), sink).with_progress(false);

        assert!(dispatcher.run(Vec::new()).is_empty());
    }
}
