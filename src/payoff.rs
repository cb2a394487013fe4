//! Contract payoffs
//!
//! European payoffs use only the terminal spot. The American payoff is a
//! naive approximation: the best of the terminal payoff and any
//! backward-discounted intrinsic value along the path. It performs no
//! continuation-value regression, so it is not an optimal-stopping
//! computation and generally understates true American option value.

/// Call or put
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionType {
    Call,
    Put,
}

impl OptionType {
    /// Intrinsic exercise value at the given spot
    ///
    /// `max(0, S - K)` for a call, `max(0, K - S)` for a put.
    #[inline]
    pub fn intrinsic(self, spot: f64, strike: f64) -> f64 {
        match self {
            OptionType::Call => (spot - strike).max(0.0),
            OptionType::Put => (strike - spot).max(0.0),
        }
    }
}

/// When the contract can be exercised
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExerciseStyle {
    /// Exercisable only at expiry
    European,
    /// Exercisable at any step, valued with the naive backward scan below
    American,
}

/// Naive American payoff for one simulated path
///
/// Starts from the terminal intrinsic value, then walks the path backward
/// from the second-to-last step, keeping the running maximum of each step's
/// intrinsic value discounted by exp(-r · (expiry - j)). The result always
/// dominates the terminal payoff, but because continuation value is ignored
/// this is only a rough lower-quality estimate of early-exercise value.
pub fn american_payoff(path: &[f64], option_type: OptionType, strike: f64, rate: f64) -> f64 {
    let expiry = path.len();
    let mut payoff = option_type.intrinsic(path[expiry - 1], strike);

    for j in (0..expiry.saturating_sub(1)).rev() {
        let early_exercise = option_type.intrinsic(path[j], strike);
        payoff = payoff.max(early_exercise * (-rate * (expiry - j) as f64).exp());
    }

    payoff
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intrinsic_call() {
        assert_eq!(OptionType::Call.intrinsic(110.0, 100.0), 10.0);
        assert_eq!(OptionType::Call.intrinsic(90.0, 100.0), 0.0);
    }

    #[test]
    fn test_intrinsic_put() {
        assert_eq!(OptionType::Put.intrinsic(90.0, 100.0), 10.0);
        assert_eq!(OptionType::Put.intrinsic(110.0, 100.0), 0.0);
    }

    #[test]
    fn test_american_single_step_is_terminal_payoff() {
        // Nothing before the terminal step, so no early exercise to scan.
        let payoff = american_payoff(&[95.0], OptionType::Put, 100.0, 0.05);
        assert_eq!(payoff, 5.0);
    }

    #[test]
    fn test_american_early_exercise_dominates() {
        // Terminal intrinsic is 0; the step-0 intrinsic of 20, discounted
        // over the two remaining periods, wins.
        let rate = 0.05;
        let payoff = american_payoff(&[120.0, 90.0], OptionType::Call, 100.0, rate);

        let expected = 20.0 * (-rate * 2.0).exp();
        assert!(
            (payoff - expected).abs() < 1e-12,
            "Payoff: {}, expected: {}",
            payoff,
            expected
        );
    }

    #[test]
    fn test_american_put_early_exercise() {
        let rate = 0.01;
        let payoff = american_payoff(&[50.0, 100.0], OptionType::Put, 100.0, rate);

        let expected = 50.0 * (-rate * 2.0).exp();
        assert!(
            (payoff - expected).abs() < 1e-12,
            "Payoff: {}, expected: {}",
            payoff,
            expected
        );
    }

    #[test]
    fn test_american_worthless_path() {
        let payoff = american_payoff(&[80.0, 85.0, 90.0], OptionType::Call, 100.0, 0.03);
        assert_eq!(payoff, 0.0);
    }

    #[test]
    fn test_american_never_below_terminal_payoff() {
        let path = [104.0, 97.0, 101.0, 113.0, 108.0];
        for option_type in [OptionType::Call, OptionType::Put] {
            let terminal = option_type.intrinsic(path[path.len() - 1], 100.0);
            let payoff = american_payoff(&path, option_type, 100.0, 0.02);
            assert!(
                payoff >= terminal,
                "American payoff {} below terminal payoff {}",
                payoff,
                terminal
            );
        }
    }
}
