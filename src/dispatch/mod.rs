// Mon Feb 2 2026 - Alex

pub mod dispatcher;
pub mod pool;
pub mod worker;

pub use dispatcher::Dispatcher;
pub use pool::{Endpoint, EndpointPool};
pub use worker::{ScoreWorker, ScoreWorkerPool};
