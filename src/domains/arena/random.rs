use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Port for the pseudo-random stream the sampler consumes.
/// Every call advances the stream by exactly one draw.
pub trait RandomSource {
    /// Uniform float between `lo` and `hi`. Computed as `lo + (hi - lo) * u`
    /// with `u` in `[0, 1)`, so a degenerate range yields `lo`.
    fn uniform(&mut self, lo: f64, hi: f64) -> f64;

    /// Uniform integer in `lo..=hi`. Callers guarantee `lo <= hi`.
    fn int_inclusive(&mut self, lo: i64, hi: i64) -> i64;

    /// Uniform index in `0..len`. Callers guarantee `len > 0`.
    fn choose_index(&mut self, len: usize) -> usize;

    /// Fair coin.
    fn coin(&mut self) -> bool;

    fn choose<T: Copy>(&mut self, items: &[T]) -> T
    where
        Self: Sized,
    {
        items[self.choose_index(items.len())]
    }
}

/// `RandomSource` backed by a `rand` generator. The default ChaCha8 stream is
/// fixed by algorithm, so a seed yields the same scenes across `rand` releases.
#[derive(Debug, Clone)]
pub struct SeededSource<R = ChaCha8Rng> {
    rng: R,
}

impl SeededSource<ChaCha8Rng> {
    pub fn from_seed(seed: u64) -> Self {
        Self { rng: ChaCha8Rng::seed_from_u64(seed) }
    }
}

impl<R: Rng> SeededSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> RandomSource for SeededSource<R> {
    fn uniform(&mut self, lo: f64, hi: f64) -> f64 {
        lo + (hi - lo) * self.rng.gen::<f64>()
    }

    fn int_inclusive(&mut self, lo: i64, hi: i64) -> i64 {
        self.rng.gen_range(lo..=hi)
    }

    fn choose_index(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }

    fn coin(&mut self) -> bool {
        self.rng.gen_bool(0.5)
    }
}

/// The deterministic stream used by the batch driver.
pub fn seeded_source(seed: u64) -> SeededSource<ChaCha8Rng> {
    SeededSource::from_seed(seed)
}
