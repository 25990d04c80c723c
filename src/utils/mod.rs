// Mon Feb 2 2026 - Alex

pub mod logging;
