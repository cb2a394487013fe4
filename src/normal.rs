//! Standard-normal sample stream
//!
//! Every stochastic quantity in the pricer is driven by i.i.d. standard
//! normal draws Z ~ N(0, 1). `NormalSource` owns both the generator and the
//! distribution, so callers control seeding explicitly instead of sharing a
//! process-global engine.

use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};

/// Owned source of independent standard-normal variates
///
/// A `NormalSource` is one sequential stream: every call to [`sample`]
/// advances it. Two sources built from the same seed produce identical
/// streams; sources built from different seeds are statistically
/// independent, which is what makes per-worker sources safe for parallel
/// pricing. Note that sequential pricing calls sharing one source keep
/// drawing from the same evolving stream rather than restarting it.
///
/// # Example
/// ```
/// use simple_monte_carlo::NormalSource;
///
/// let mut source = NormalSource::from_seed(42);
/// let z = source.sample();
/// assert!(z.is_finite());
/// ```
///
/// [`sample`]: NormalSource::sample
#[derive(Debug, Clone)]
pub struct NormalSource {
    rng: StdRng,
    /// Standard normal distribution N(0, 1)
    normal: Normal<f64>,
}

impl NormalSource {
    /// Seed used by [`Default`], for reproducible runs out of the box
    pub const DEFAULT_SEED: u64 = 0;

    /// Creates a deterministic source from an explicit seed
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            normal: Normal::new(0.0, 1.0).expect("Invalid normal distribution parameters"),
        }
    }

    /// Creates a source seeded from OS entropy
    ///
    /// Use when statistically fresh runs matter more than reproducibility.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            normal: Normal::new(0.0, 1.0).expect("Invalid normal distribution parameters"),
        }
    }

    /// Draws one Z ~ N(0, 1) and advances the stream
    #[inline]
    pub fn sample(&mut self) -> f64 {
        self.normal.sample(&mut self.rng)
    }
}

impl Default for NormalSource {
    fn default() -> Self {
        Self::from_seed(Self::DEFAULT_SEED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_stream() {
        let mut a = NormalSource::from_seed(7);
        let mut b = NormalSource::from_seed(7);

        for _ in 0..100 {
            assert_eq!(a.sample().to_bits(), b.sample().to_bits());
        }
    }

    #[test]
    fn test_distinct_seeds_diverge() {
        let mut a = NormalSource::from_seed(1);
        let mut b = NormalSource::from_seed(2);

        let diverges = (0..100).any(|_| a.sample() != b.sample());
        assert!(diverges, "Distinct seeds should give distinct streams");
    }

    #[test]
    fn test_default_uses_fixed_seed() {
        let mut a = NormalSource::default();
        let mut b = NormalSource::from_seed(NormalSource::DEFAULT_SEED);

        assert_eq!(a.sample().to_bits(), b.sample().to_bits());
    }

    #[test]
    fn test_sample_moments() {
        let mut source = NormalSource::from_seed(42);
        let n = 200_000;

        let mut sum = 0.0;
        let mut sum_sq = 0.0;
        for _ in 0..n {
            let z = source.sample();
            sum += z;
            sum_sq += z * z;
        }

        let mean = sum / n as f64;
        let variance = sum_sq / n as f64 - mean * mean;

        assert!(mean.abs() < 0.01, "Sample mean: {}, expected ≈ 0", mean);
        assert!(
            (variance - 1.0).abs() < 0.02,
            "Sample variance: {}, expected ≈ 1",
            variance
        );
    }
}
