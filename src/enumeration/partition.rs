use std::fmt::{Display, Formatter};

/// A half-open range `[start, end)` of variant indices.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IndexRange {
    pub start: u64,
    pub end: u64,
}

impl IndexRange {
    pub fn new(start: u64, end: u64) -> IndexRange {
        assert!(start <= end, "Invalid index range [{start}, {end}).");
        IndexRange { start, end }
    }

    pub fn len(&self) -> u64 {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn contains(&self, index: u64) -> bool {
        self.start <= index && index < self.end
    }

    pub fn iter(&self) -> std::ops::Range<u64> {
        self.start..self.end
    }
}

impl Display for IndexRange {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

/// Split `[0, num_variants)` into `workers` contiguous ranges of equal size. The last
/// range absorbs the remainder of the division.
///
/// If `workers <= 1` or `workers >= num_variants`, a single range covering the whole
/// space is returned.
pub fn partition(num_variants: u64, workers: usize) -> Vec<IndexRange> {
    let workers = workers as u64;
    if workers <= 1 || workers >= num_variants {
        return vec![IndexRange::new(0, num_variants)];
    }

    let size = num_variants / workers;
    (0..workers)
        .map(|i| {
            let end = if i == workers - 1 {
                num_variants
            } else {
                (i + 1) * size
            };
            IndexRange::new(i * size, end)
        })
        .collect()
}

/// Split `total` random samples between `workers` using the same rule as [`partition`]:
/// every worker gets `total / workers` samples and the last one also gets the remainder.
pub fn split_samples(total: u64, workers: usize) -> Vec<u64> {
    partition(total, workers).iter().map(|it| it.len()).collect()
}

/// Decide how many workers to use.
///
/// Without `parallel`, or with a single available thread, this is always `1`. Otherwise,
/// the result is `min(available, num_variants)` rounded down to an even number. A result
/// that would not split the space at all falls back to `1`.
pub fn choose_worker_count(available: usize, num_variants: u64, parallel: bool) -> usize {
    if !parallel || available <= 1 {
        return 1;
    }
    let mut workers = u64::try_from(available)
        .unwrap_or(u64::MAX)
        .min(num_variants);
    if workers % 2 == 1 {
        workers -= 1;
    }
    if workers <= 1 || workers >= num_variants {
        1
    } else {
        // `workers <= available`, hence it fits into `usize`.
        workers as usize
    }
}
