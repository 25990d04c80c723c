// Tue Feb 3 2026 - Alex

use crate::dispatch::pool::Endpoint;
use crate::scorer::{ScoreResult, Scorer};
use crate::sink::FileSink;
use crate::source::WorkItem;
use std::collections::VecDeque;
use std::panic::{self, AssertUnwindSafe};
use std::sync::mpsc::Sender;
use std::sync::Arc;
use std::thread::{self, JoinHandle};

// One dispatch slot. A worker owns one endpoint and the queue of items
// assigned to it, so at most one request is in flight per endpoint.
pub struct ScoreWorker {
    id: usize,
    endpoint: Endpoint,
    queue: VecDeque<WorkItem>,
    scorer: Arc<Scorer>,
    sink: Arc<FileSink>,
    result_sender: Option<Sender<ScoreResult>>,
    thread_handle: Option<JoinHandle<()>>,
}

impl ScoreWorker {
    pub fn new(
        id: usize,
        endpoint: Endpoint,
        queue: VecDeque<WorkItem>,
        scorer: Arc<Scorer>,
        sink: Arc<FileSink>,
        result_sender: Sender<ScoreResult>,
    ) -> Self {
        Self {
            id,
            endpoint,
            queue,
            scorer,
            sink,
            result_sender: Some(result_sender),
            thread_handle: None,
        }
    }

    pub fn start(&mut self) {
        let sender = match self.result_sender.take() {
            Some(sender) => sender,
            None => return,
        };

        let id = self.id;
        let endpoint = self.endpoint.clone();
        let queue = std::mem::take(&mut self.queue);
        let scorer = self.scorer.clone();
        let sink = self.sink.clone();

        let handle = thread::spawn(move || {
            ScoreWorker::worker_loop(id, endpoint, queue, scorer, sink, sender);
        });

        self.thread_handle = Some(handle);
    }

    pub fn join(&mut self) {
        if let Some(handle) = self.thread_handle.take() {
            let _ = handle.join();
        }
    }

    fn worker_loop(
        id: usize,
        endpoint: Endpoint,
        queue: VecDeque<WorkItem>,
        scorer: Arc<Scorer>,
        sink: Arc<FileSink>,
        sender: Sender<ScoreResult>,
    ) {
        for item in queue {
            let (item_id, year) = (item.id, item.year);

            // The scorer absorbs transport and parse failures itself; a
            // panic is downgraded to an invalid result here, sibling
            // slots keep running.
            let result = panic::catch_unwind(AssertUnwindSafe(|| {
                scorer.score(&item, &endpoint)
            }))
            .unwrap_or_else(|_| {
                log::error!("slot {} panicked while scoring item {}", id, item_id);
                ScoreResult::invalid(item_id, year)
            });

            if let Err(e) = sink.append(result.id, result.year, result.score) {
                log::error!(
                    "slot {}: failed to persist result for item {}: {}",
                    id,
                    result.id,
                    e
                );
            }

            let _ = sender.send(result);
        }
    }

    pub fn id(&self) -> usize {
        self.id
    }

    pub fn queued(&self) -> usize {
        self.queue.len()
    }

    pub fn is_running(&self) -> bool {
        self.thread_handle.is_some()
    }
}

impl Drop for ScoreWorker {
    fn drop(&mut self) {
        self.join();
    }
}

pub struct ScoreWorkerPool {
    workers: Vec<ScoreWorker>,
}

impl ScoreWorkerPool {
    pub fn new(workers: Vec<ScoreWorker>) -> Self {
        Self { workers }
    }

    pub fn start(&mut self) {
        for worker in &mut self.workers {
            worker.start();
        }
    }

    pub fn join(&mut self) {
        for worker in &mut self.workers {
            worker.join();
        }
    }

    pub fn size(&self) -> usize {
        self.workers.len()
    }
}
