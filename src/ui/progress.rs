// Mon Feb 2 2026 - Alex

use indicatif::{ProgressBar as IndicatifBar, ProgressStyle};
use std::time::Duration;

pub struct ProgressBar {
    bar: IndicatifBar,
}

impl ProgressBar {
    pub fn new(total: u64) -> Self {
        let style = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {msg}")
            .unwrap()
            .progress_chars("█▓▒░ ");

        let bar = IndicatifBar::new(total);
        bar.set_style(style);

        Self { bar }
    }

    // Keeps the counting behavior without drawing anything, for
    // --no-progress runs and tests.
    pub fn hidden(total: u64) -> Self {
        let bar = IndicatifBar::hidden();
        bar.set_length(total);
        Self { bar }
    }

    pub fn with_message(self, message: &str) -> Self {
        self.bar.set_message(message.to_string());
        self
    }

    pub fn increment(&self, delta: u64) {
        self.bar.inc(delta);
    }

    pub fn set_message(&self, message: &str) {
        self.bar.set_message(message.to_string());
    }

    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    pub fn finish(&self) {
        self.bar.finish();
    }

    pub fn finish_with_message(&self, message: &str) {
        self.bar.finish_with_message(message.to_string());
    }

    pub fn finish_and_clear(&self) {
        self.bar.finish_and_clear();
    }

    pub fn enable_steady_tick(&self, interval: Duration) {
        self.bar.enable_steady_tick(interval);
    }
}
