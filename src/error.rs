//! Error types for pricing calls
//!
//! Every failure is local to one pricing call; there is no partial result.
//! Invalid input is rejected before any simulation runs, and a non-finite
//! intermediate or estimate is surfaced as an error instead of being
//! returned as `inf`/`NaN`.

/// Errors a pricing call can return
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PricingError {
    #[error("expiry must be at least one period")]
    ZeroExpiry,

    #[error("path count must be at least one")]
    ZeroPaths,

    #[error("{name} must be positive, got {value}")]
    NonPositive { name: &'static str, value: f64 },

    #[error("volatility must be non-negative, got {0}")]
    NegativeVolatility(f64),

    #[error("{what} is not finite")]
    NonFinite { what: &'static str },
}

pub type PricingResult<T> = Result<T, PricingError>;
