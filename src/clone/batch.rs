//! Splits an ordered job list into fixed-size batches

use super::CloneJob;

/// Partitions jobs into consecutive groups of at most `size`, preserving order
///
/// Batch `i` covers jobs `[i*size, (i+1)*size)`; the last batch may be
/// shorter. An empty input yields zero batches. A `size` of zero is treated
/// as 1 so the partition is always well-defined.
pub fn batch_jobs(jobs: &[CloneJob], size: usize) -> Vec<&[CloneJob]> {
    jobs.chunks(size.max(1)).collect()
}
