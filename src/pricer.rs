//! Monte Carlo pricing loop
//!
//! Prices one contract by averaging discounted payoffs over independent
//! simulated trials: validate the parameters, precompute the GBM sampling
//! constants, accumulate payoffs across `n_paths` trials, then divide by the
//! path count and discount by exp(-rT). Sequential pricing draws from a
//! caller-supplied [`NormalSource`]; [`price_parallel`] distributes fixed
//! path blocks over rayon workers with independent per-block sources.

use crate::error::{PricingError, PricingResult};
use crate::gbm::GbmGenerator;
use crate::normal::NormalSource;
use crate::payoff::{american_payoff, ExerciseStyle, OptionType};
use rayon::prelude::*;

/// Paths per parallel worker block
///
/// Fixed, so the block decomposition (and with it the result for a given
/// base seed) does not depend on the thread count.
const BLOCK_SIZE: usize = 16_384;

/// Model parameters for one pricing call
///
/// Immutable for the duration of the call. `expiry` counts discrete periods;
/// `drift` and `rate` may be any finite real; `strike` and `spot` must be
/// positive and `vol` non-negative.
#[derive(Debug, Clone)]
pub struct PricingInputs {
    /// Time to maturity, in discrete periods
    pub expiry: usize,
    /// Strike price K
    pub strike: f64,
    /// Current spot price S_0
    pub spot: f64,
    /// Expected return (drift) μ of the underlying
    pub drift: f64,
    /// Volatility σ
    pub vol: f64,
    /// Risk-free rate r
    pub rate: f64,
    /// Number of simulated paths
    pub n_paths: usize,
}

impl PricingInputs {
    /// Validates the parameter set
    ///
    /// # Errors
    /// One [`PricingError`] variant per violated constraint: zero expiry or
    /// path count, non-positive strike/spot, negative volatility, or a
    /// non-finite rate/drift/volatility.
    pub fn validate(&self) -> PricingResult<()> {
        if self.expiry == 0 {
            return Err(PricingError::ZeroExpiry);
        }
        if self.n_paths == 0 {
            return Err(PricingError::ZeroPaths);
        }
        // `<=` alone would let NaN through.
        if self.strike.is_nan() || self.strike <= 0.0 {
            return Err(PricingError::NonPositive {
                name: "strike",
                value: self.strike,
            });
        }
        if self.spot.is_nan() || self.spot <= 0.0 {
            return Err(PricingError::NonPositive {
                name: "spot",
                value: self.spot,
            });
        }
        if self.vol < 0.0 {
            return Err(PricingError::NegativeVolatility(self.vol));
        }
        if !self.vol.is_finite() {
            return Err(PricingError::NonFinite { what: "volatility" });
        }
        if !self.drift.is_finite() {
            return Err(PricingError::NonFinite { what: "drift" });
        }
        if !self.rate.is_finite() {
            return Err(PricingError::NonFinite { what: "rate" });
        }
        Ok(())
    }

    /// Present-value discount factor exp(-rT)
    fn discount(&self) -> f64 {
        (-self.rate * self.expiry as f64).exp()
    }
}

/// Prices one option contract by simple Monte Carlo
///
/// Runs `n_paths` independent trials drawing from `source`. With a fixed
/// seed and no interleaved consumers of the same source, the result is
/// bit-reproducible.
///
/// # Errors
/// Invalid parameters (see [`PricingInputs::validate`]) or a non-finite
/// intermediate/estimate.
///
/// # Example
/// ```
/// use simple_monte_carlo::{price, ExerciseStyle, NormalSource, OptionType, PricingInputs};
///
/// let inputs = PricingInputs {
///     expiry: 1,
///     strike: 100.0,
///     spot: 100.0,
///     drift: 0.0,
///     vol: 0.3,
///     rate: 0.0,
///     n_paths: 10_000,
/// };
/// let mut source = NormalSource::default();
/// let call = price(&inputs, OptionType::Call, ExerciseStyle::European, &mut source).unwrap();
/// assert!(call > 0.0);
/// ```
pub fn price(
    inputs: &PricingInputs,
    option_type: OptionType,
    exercise: ExerciseStyle,
    source: &mut NormalSource,
) -> PricingResult<f64> {
    inputs.validate()?;
    let generator = GbmGenerator::new(inputs)?;

    let sum = sum_payoffs(inputs, option_type, exercise, &generator, source, inputs.n_paths);
    discounted_mean(inputs, sum)
}

/// Prices one option contract in parallel across path blocks
///
/// Each block draws from its own [`NormalSource`], deterministically derived
/// from `base_seed` and the block index, and the partial sums are combined
/// in block order. For a given `base_seed` the result is therefore
/// reproducible on any number of threads. The estimate differs from the
/// sequential [`price`] stream, but the payoff distribution is identical.
///
/// # Errors
/// Same conditions as [`price`].
pub fn price_parallel(
    inputs: &PricingInputs,
    option_type: OptionType,
    exercise: ExerciseStyle,
    base_seed: u64,
) -> PricingResult<f64> {
    inputs.validate()?;
    let generator = GbmGenerator::new(inputs)?;

    let n_blocks = inputs.n_paths.div_ceil(BLOCK_SIZE);
    let block_sums: Vec<f64> = (0..n_blocks)
        .into_par_iter()
        .map(|block| {
            let start = block * BLOCK_SIZE;
            let len = BLOCK_SIZE.min(inputs.n_paths - start);
            let mut source = NormalSource::from_seed(block_seed(base_seed, block));
            sum_payoffs(inputs, option_type, exercise, &generator, &mut source, len)
        })
        .collect();

    discounted_mean(inputs, block_sums.iter().sum())
}

/// Accumulates raw (undiscounted) payoffs over `n_trials` simulated paths
fn sum_payoffs(
    inputs: &PricingInputs,
    option_type: OptionType,
    exercise: ExerciseStyle,
    generator: &GbmGenerator,
    source: &mut NormalSource,
    n_trials: usize,
) -> f64 {
    match exercise {
        ExerciseStyle::European => (0..n_trials)
            .map(|_| option_type.intrinsic(generator.terminal(source), inputs.strike))
            .sum(),
        ExerciseStyle::American => {
            // One path buffer, reused across trials.
            let mut path = vec![0.0; inputs.expiry];
            let mut sum = 0.0;
            for _ in 0..n_trials {
                generator.fill_path(source, &mut path);
                sum += american_payoff(&path, option_type, inputs.strike, inputs.rate);
            }
            sum
        }
    }
}

/// Sample mean of the payoffs, discounted to present value
fn discounted_mean(inputs: &PricingInputs, sum: f64) -> PricingResult<f64> {
    let estimate = sum / inputs.n_paths as f64 * inputs.discount();
    if !estimate.is_finite() {
        return Err(PricingError::NonFinite {
            what: "price estimate",
        });
    }
    Ok(estimate)
}

/// Spreads block indices into well-separated seeds (SplitMix64 finalizer)
fn block_seed(base_seed: u64, block: usize) -> u64 {
    let mut z = base_seed.wrapping_add((block as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15));
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}
