// Mon Feb 2 2026 - Alex

#![allow(dead_code)]

pub mod aggregate;
pub mod config;
pub mod dispatch;
pub mod output;
pub mod scorer;
pub mod sink;
pub mod source;
pub mod ui;
pub mod utils;

pub use aggregate::{AggregateRecord, Aggregator};
pub use config::Config;
pub use dispatch::{Dispatcher, Endpoint, EndpointPool};
pub use scorer::{ScoreResult, Scorer, INVALID_SCORE};
pub use sink::FileSink;
pub use source::{CsvSource, WorkItem};
