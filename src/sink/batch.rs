use anyhow::Result;
use log::{error, info, warn};

use crate::database::BatchReport;

/// Totals over every batch of one write run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WriteSummary {
    pub batches: usize,
    pub written: usize,
    pub failed: usize,
    /// 1-based positions in the input of every record that was not written
    pub failed_records: Vec<usize>,
}

/// Feed `records` to `write` in chunks of `batch_size`, final chunk partial.
///
/// A record failure inside a batch is counted and the batch still commits.
/// A batch that fails as a whole counts all of its records as failed and
/// the remaining batches still run. Nothing is retried.
pub fn write_in_batches<T, F>(records: &[T], batch_size: usize, mut write: F) -> WriteSummary
where
    F: FnMut(&[T]) -> Result<BatchReport>,
{
    let batch_size = batch_size.max(1);
    let total_batches = records.len().div_ceil(batch_size);
    let mut summary = WriteSummary::default();

    for (idx, chunk) in records.chunks(batch_size).enumerate() {
        let batch_number = idx + 1;
        let offset = idx * batch_size;
        summary.batches += 1;

        match write(chunk) {
            Ok(report) => {
                info!(
                    "  → Batch {}/{}: {} written, {} failed",
                    batch_number,
                    total_batches,
                    report.written,
                    report.failed()
                );
                for failure in &report.failures {
                    let position = offset + failure.index + 1;
                    warn!("Failed to write record {}: {}", position, failure.message);
                    summary.failed_records.push(position);
                }
                summary.written += report.written;
                summary.failed += report.failed();
            }
            Err(e) => {
                error!(
                    "  → Batch {}/{} failed, {} records not written: {:#}",
                    batch_number,
                    total_batches,
                    chunk.len(),
                    e
                );
                summary.failed += chunk.len();
                summary.failed_records.extend(offset + 1..=offset + chunk.len());
            }
        }
    }

    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::RecordFailure;

    fn all_written(chunk: &[u32]) -> Result<BatchReport> {
        Ok(BatchReport {
            written: chunk.len(),
            failures: Vec::new(),
        })
    }

    #[test]
    fn test_partial_final_batch_is_flushed() {
        let records: Vec<u32> = (0..120).collect();
        let mut sizes = Vec::new();

        let summary = write_in_batches(&records, 50, |chunk| {
            sizes.push(chunk.len());
            all_written(chunk)
        });

        assert_eq!(sizes, vec![50, 50, 20]);
        assert_eq!(summary.batches, 3);
        assert_eq!(summary.written, 120);
        assert_eq!(summary.failed, 0);
    }

    #[test]
    fn test_failed_batch_counts_every_record() {
        let records: Vec<u32> = (0..5).collect();
        let mut calls = 0;

        let summary = write_in_batches(&records, 2, |chunk| {
            calls += 1;
            if calls == 2 {
                anyhow::bail!("commit failed");
            }
            all_written(chunk)
        });

        assert_eq!(summary.batches, 3);
        assert_eq!(summary.written, 3);
        assert_eq!(summary.failed, 2);
        assert_eq!(summary.failed_records, vec![3, 4]);
    }

    #[test]
    fn test_record_failures_inside_batch() {
        let records = vec![1u32, 2, 3, 4, 5];
        let summary = write_in_batches(&records, 3, |chunk| {
            Ok(BatchReport {
                written: chunk.len() - 1,
                failures: vec![RecordFailure {
                    index: 1,
                    message: "bad".to_string(),
                }],
            })
        });

        assert_eq!(summary.written, 3);
        assert_eq!(summary.failed, 2);
        assert_eq!(summary.failed_records, vec![2, 5]);
    }

    #[test]
    fn test_nothing_to_write() {
        let records: Vec<u32> = Vec::new();
        let summary = write_in_batches(&records, 50, all_written);
        assert_eq!(summary, WriteSummary::default());
    }
}
