//! Index partitioning

use std::ops::Range;

/// Splits `[0, n)` into `workers` contiguous ranges of `⌈n / workers⌉`
/// indices each. The last ranges may be shorter or empty. The worker count
/// is clamped to at least 1.
///
/// * `n`       - Number of samples.
/// * `workers` - Number of workers.
pub fn partition(n: u64, workers: usize) -> Vec<Range<u64>> {
    let workers = workers.max(1) as u64;
    let chunk = n.div_ceil(workers);
    (0..workers)
        .map(|w| {
            let start = (w * chunk).min(n);
            let end = ((w + 1) * chunk).min(n);
            start..end
        })
        .collect()
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------
