//! Sources of variant indices processed by a single worker.
//!
//! - [`ExhaustiveSource`]: every index of an [`IndexRange`](crate::enumeration::IndexRange),
//!   in ascending order.
//! - [`RandomSource`]: a fixed number of independent, uniformly distributed indices drawn
//!   with replacement from `[0, 2^k)`. The sequence is fully determined by the seed, the
//!   sample size and the size of the index space.
//!
//! Both are plain iterators over `u64`. [`SampleSource`] wraps either of them so that workers
//! can be configured at runtime.

mod exhaustive;
mod random;


pub use exhaustive::ExhaustiveSource;
pub use random::RandomSource;

/// A runtime choice between [`ExhaustiveSource`] and [`RandomSource`].
#[derive(Clone, Debug)]
pub enum SampleSource {
    Exhaustive(ExhaustiveSource),
    Random(RandomSource),
}

impl SampleSource {
    /// Number of indices this source still has to produce.
    pub fn remaining(&self) -> u64 {
        match self {
            SampleSource::Exhaustive(source) => source.remaining(),
            SampleSource::Random(source) => source.remaining(),
        }
    }

    /// Total number of indices this source produces over its lifetime.
    pub fn total(&self) -> u64 {
        match self {
            SampleSource::Exhaustive(source) => source.range().len(),
            SampleSource::Random(source) => source.sample_size(),
        }
    }
}

impl From<ExhaustiveSource> for SampleSource {
    fn from(value: ExhaustiveSource) -> Self {
        SampleSource::Exhaustive(value)
    }
}

impl From<RandomSource> for SampleSource {
    fn from(value: RandomSource) -> Self {
        SampleSource::Random(value)
    }
}

impl Iterator for SampleSource {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        match self {
            SampleSource::Exhaustive(source) => source.next(),
            SampleSource::Random(source) => source.next(),
        }
    }
}
