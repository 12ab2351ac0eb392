//! Randomness seam for the synthetic generator.
//!
//! The generator only needs three kinds of draw, so it depends on this small
//! trait instead of a concrete RNG. Any `rand::Rng` implements it, which lets
//! the binary use OS entropy while tests use `StdRng::seed_from_u64`.

use rand::Rng;

pub trait RandomSource {
    /// Uniform integer in `[low, high]`. Requires `low <= high`.
    fn int_inclusive(&mut self, low: u64, high: u64) -> u64;

    /// Uniform real in `[low, high)`. Requires `low < high`.
    fn real(&mut self, low: f64, high: f64) -> f64;

    /// Uniform index in `[0, len)`. Requires `len > 0`.
    fn pick(&mut self, len: usize) -> usize;
}

impl<R: Rng> RandomSource for R {
    fn int_inclusive(&mut self, low: u64, high: u64) -> u64 {
        self.gen_range(low..=high)
    }

    fn real(&mut self, low: f64, high: f64) -> f64 {
        self.gen_range(low..high)
    }

    fn pick(&mut self, len: usize) -> usize {
        self.gen_range(0..len)
    }
}
