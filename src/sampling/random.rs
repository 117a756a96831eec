use crate::enumeration::IndexRange;
use fastrand::Rng;

/// Draws a fixed number of variant indices uniformly (with replacement) from
/// `[0, num_variants)`.
///
/// The generator is seeded exactly once, at construction. Two sources created with the same
/// `(seed, sample_size, num_variants)` produce the same sequence on every platform.
#[derive(Clone, Debug)]
pub struct RandomSource {
    rng: Rng,
    seed: u64,
    num_variants: u64,
    sample_size: u64,
    drawn: u64,
}

impl RandomSource {
    /// Panics if `num_variants` is zero.
    pub fn new(seed: u64, sample_size: u64, num_variants: u64) -> RandomSource {
        assert!(num_variants > 0, "Cannot sample from an empty index space.");
        RandomSource {
            rng: Rng::with_seed(seed),
            seed,
            num_variants,
            sample_size,
            drawn: 0,
        }
    }

    /// The draws `[range.start, range.end)` of the sequence of `RandomSource::new(seed, _,
    /// num_variants)`. Consecutive slices of one sequence concatenate back into it, which
    /// lets workers share a single sample independently of their number.
    ///
    /// Panics if `num_variants` is zero.
    pub fn slice(seed: u64, range: IndexRange, num_variants: u64) -> RandomSource {
        let mut source = RandomSource::new(seed, range.len(), num_variants);
        // Draws are consumed one by one, since a single draw may use more than one
        // output of the generator.
        for _ in 0..range.start {
            source.rng.u64(0..num_variants);
        }
        source
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn sample_size(&self) -> u64 {
        self.sample_size
    }

    pub fn num_variants(&self) -> u64 {
        self.num_variants
    }

    pub fn remaining(&self) -> u64 {
        self.sample_size - self.drawn
    }
}

impl Iterator for RandomSource {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        if self.drawn >= self.sample_size {
            return None;
        }
        self.drawn += 1;
        Some(self.rng.u64(0..self.num_variants))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::try_from(self.remaining()).ok();
        (remaining.unwrap_or(usize::MAX), remaining)
    }
}
