//! Configuration constants and settings

// Retry configuration
//
// Retries are immediate with no backoff: the attempt budget exists to ride
// out short network blips, not sustained outages. A sustained outage burns
// through the budget in a tight loop and lands the job in the failure log.

/// Total attempts allowed per repository before it counts as a permanent failure
pub const MAXIMUM_ATTEMPT_COUNT: u32 = 100;

/// Timeout for a single clone attempt; a hung subprocess must not stall the run
pub const CLONE_ATTEMPT_TIMEOUT_SECS: u64 = 600;

/// Failure log file name, created in the process working directory
pub const FAILURE_LOG_FILENAME: &str = "orgCloneErrors.log.txt";

/// Page size for the organization listing call
pub const LISTING_PAGE_SIZE: u32 = 150;

/// Determines how many clones run concurrently within a batch
///
/// Priority order:
/// 1. --sequential flag → 1
/// 2. --jobs N flag → N (floored at 1)
/// 3. Default → logical CPU count, floored at 1
pub fn get_clone_parallelism(jobs: Option<usize>, sequential: bool) -> usize {
    if sequential {
        return 1;
    }

    if let Some(n) = jobs {
        return n.max(1); // Ensure at least 1
    }

    num_cpus::get().max(1)
}
