//! Geometric Brownian Motion terminal and path sampling
//!
//! Under GBM, dS_t = μ S_t dt + σ S_t dW_t with solution
//! S_t = S_0 exp((μ - σ²/2)t + σ W_t), so log-price shocks are normal.
//! The pricer precomputes a drift-and-Itô-corrected anchor once per pricing
//! call; after that, each sample is a single multiplicative exp(σ·Z) shock.

use crate::error::{PricingError, PricingResult};
use crate::normal::NormalSource;
use crate::pricer::PricingInputs;

/// Per-call sampling constants for GBM
///
/// Built once per pricing call from validated inputs. The anchor
/// `moved_spot = S_0 exp((μ + r)T - σ²T/2)` applies the Itô convexity
/// correction to the naive continuously compounded drift, so that one
/// multiplicative normal shock reproduces the exact terminal distribution
/// of the process.
#[derive(Debug, Clone)]
pub struct GbmGenerator {
    moved_spot: f64,
    /// Full-expiry standard deviation σ√T, for the single terminal shock
    root_variance: f64,
    /// One-period standard deviation σ, for each step of a discretized path
    step_root_variance: f64,
}

impl GbmGenerator {
    /// Precomputes the sampling constants for one pricing call
    ///
    /// # Errors
    /// Returns [`PricingError::NonFinite`] when the variance or the anchor
    /// overflows, e.g. for extreme σ²T.
    pub fn new(inputs: &PricingInputs) -> PricingResult<Self> {
        let expiry = inputs.expiry as f64;

        let variance = inputs.vol * inputs.vol * expiry;
        if !variance.is_finite() {
            return Err(PricingError::NonFinite { what: "variance" });
        }

        let root_variance = variance.sqrt();
        let ito_correction = -0.5 * variance;

        let moved_spot =
            inputs.spot * ((inputs.drift + inputs.rate) * expiry + ito_correction).exp();
        if !moved_spot.is_finite() {
            return Err(PricingError::NonFinite { what: "moved spot" });
        }

        Ok(Self {
            moved_spot,
            root_variance,
            step_root_variance: inputs.vol,
        })
    }

    /// Samples one terminal spot: S_T = moved_spot · exp(σ√T · Z)
    ///
    /// Exact for the terminal marginal of GBM; no intermediate steps are
    /// simulated.
    #[inline]
    pub fn terminal(&self, source: &mut NormalSource) -> f64 {
        self.moved_spot * (self.root_variance * source.sample()).exp()
    }

    /// Fills `path` with one discretized spot path for early-exercise scans
    ///
    /// Step 0 is the anchor (which already carries the full-expiry drift);
    /// step j multiplies step j-1 by exp(σ · Z_j), one unit-period shock per
    /// step. This is a coarse early-exercise discretization, not a fine time
    /// grid.
    pub fn fill_path(&self, source: &mut NormalSource, path: &mut [f64]) {
        path[0] = self.moved_spot;
        for j in 1..path.len() {
            path[j] = path[j - 1] * (self.step_root_variance * source.sample()).exp();
        }
    }

    /// Drift-and-Itô-corrected expected terminal spot
    pub fn moved_spot(&self) -> f64 {
        self.moved_spot
    }
}
