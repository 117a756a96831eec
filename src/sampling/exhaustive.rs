use crate::enumeration::IndexRange;

/// Produces every index of an [`IndexRange`] exactly once, in ascending order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExhaustiveSource {
    range: IndexRange,
    next: u64,
}

impl From<IndexRange> for ExhaustiveSource {
    fn from(range: IndexRange) -> Self {
        ExhaustiveSource {
            next: range.start,
            range,
        }
    }
}

impl ExhaustiveSource {
    pub fn range(&self) -> IndexRange {
        self.range
    }

    pub fn remaining(&self) -> u64 {
        self.range.end - self.next
    }
}

impl Iterator for ExhaustiveSource {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        if self.next >= self.range.end {
            return None;
        }
        let index = self.next;
        self.next += 1;
        Some(index)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::try_from(self.remaining()).ok();
        (remaining.unwrap_or(usize::MAX), remaining)
    }
}
