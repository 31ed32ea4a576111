use log::{info, warn};

use crate::errors::SkipReason;

/// Running per-record counts for one utility run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub processed: usize,
    pub succeeded: usize,
    pub skipped: usize,
    pub errored: usize,
}

impl RunSummary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_success(&mut self) {
        self.processed += 1;
        self.succeeded += 1;
        self.log_progress();
    }

    pub fn record_skip(&mut self, reason: &SkipReason) {
        warn!("Skipping record: {}", reason);
        self.processed += 1;
        if reason.is_malformed() {
            self.errored += 1;
        } else {
            self.skipped += 1;
        }
        self.log_progress();
    }

    /// Records that were accepted earlier but failed while being written
    pub fn record_write_failures(&mut self, count: usize) {
        self.succeeded = self.succeeded.saturating_sub(count);
        self.errored += count;
    }

    pub fn record<T>(&mut self, outcome: &Result<T, SkipReason>) {
        match outcome {
            Ok(_) => self.record_success(),
            Err(reason) => self.record_skip(reason),
        }
    }

    fn log_progress(&self) {
        if is_milestone(self.processed) {
            info!(
                "  → Progress: {} records ({} ok, {} skipped, {} errors)",
                self.processed, self.succeeded, self.skipped, self.errored
            );
        }
    }
}

fn is_milestone(count: usize) -> bool {
    count % 100 == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_routes_outcomes() {
        let mut summary = RunSummary::new();
        summary.record::<()>(&Ok(()));
        summary.record::<()>(&Err(SkipReason::UnknownGame("Root".to_string())));
        summary.record::<()>(&Err(SkipReason::InvalidTimestamp("".to_string())));

        assert_eq!(summary.processed, 3);
        assert_eq!(summary.succeeded, 1);
        assert_eq!(summary.skipped, 1);
        assert_eq!(summary.errored, 1);
    }

    #[test]
    fn test_write_failures_move_successes_to_errors() {
        let mut summary = RunSummary::new();
        for _ in 0..5 {
            summary.record_success();
        }
        summary.record_write_failures(2);

        assert_eq!(summary.processed, 5);
        assert_eq!(summary.succeeded, 3);
        assert_eq!(summary.errored, 2);
    }
}
