//! # Simple Monte Carlo Option Pricing
//!
//! Prices a single-underlying option contract (European or naively-exercised
//! American, call or put) under geometric Brownian motion by plain Monte
//! Carlo: simulate, evaluate the payoff, average, discount.
//!
//! ## Modules
//!
//! - [`normal`] - standard-normal sample stream with explicit seeding
//! - [`gbm`] - GBM terminal and path sampling
//! - [`payoff`] - contract variants and payoff formulas
//! - [`pricer`] - parameter validation and the pricing loop
//! - [`error`] - error taxonomy
//!
//! ## Example
//!
//! ```rust
//! use simple_monte_carlo::{price, ExerciseStyle, NormalSource, OptionType, PricingInputs};
//!
//! let inputs = PricingInputs {
//!     expiry: 1,
//!     strike: 100.0,
//!     spot: 100.0,
//!     drift: 0.0,
//!     vol: 0.3,
//!     rate: 0.0,
//!     n_paths: 100_000,
//! };
//!
//! let mut source = NormalSource::default();
//! let call = price(&inputs, OptionType::Call, ExerciseStyle::European, &mut source).unwrap();
//! println!("Call price: {:.4}", call);
//! ```

pub mod error;
pub mod gbm;
pub mod normal;
pub mod payoff;
pub mod pricer;

pub use error::{PricingError, PricingResult};
pub use gbm::GbmGenerator;
pub use normal::NormalSource;
pub use payoff::{american_payoff, ExerciseStyle, OptionType};
pub use pricer::{price, price_parallel, PricingInputs};
