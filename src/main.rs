//! Example usage of the Monte Carlo pricer
//!
//! Run with: cargo run --release

use simple_monte_carlo::{price_parallel, ExerciseStyle, NormalSource, OptionType, PricingInputs};

fn main() {
    println!("=== Simple Monte Carlo Option Pricing ===\n");

    example_european_parity();
    example_american_parity();
}

fn example_european_parity() {
    println!("--- European option, 1 period ---");

    let inputs = PricingInputs {
        expiry: 1,
        strike: 100.0,
        spot: 100.0,
        drift: 0.0,
        vol: 0.3,
        rate: 0.0,
        n_paths: 10_000_000,
    };

    report_parity(&inputs, ExerciseStyle::European);
}

fn example_american_parity() {
    println!("--- American option (naive early exercise), 10 periods ---");

    let inputs = PricingInputs {
        expiry: 10,
        strike: 100.0,
        spot: 100.0,
        drift: 0.005,
        vol: 0.03,
        rate: 0.003,
        n_paths: 10_000_000,
    };

    report_parity(&inputs, ExerciseStyle::American);
}

fn report_parity(inputs: &PricingInputs, exercise: ExerciseStyle) {
    println!(
        "  S0 = {:.2}, K = {:.2}, mu = {}, sigma = {}, r = {}, T = {} periods, {} paths",
        inputs.spot,
        inputs.strike,
        inputs.drift,
        inputs.vol,
        inputs.rate,
        inputs.expiry,
        inputs.n_paths
    );

    let seed = NormalSource::DEFAULT_SEED;

    let call = price_parallel(inputs, OptionType::Call, exercise, seed)
        .expect("hard-coded parameters are valid");
    let put = price_parallel(inputs, OptionType::Put, exercise, seed)
        .expect("hard-coded parameters are valid");

    println!("  Call price: {:.4}", call);
    println!("  Put price:  {:.4}", put);

    // Put-call parity sanity check: Call + K*e^(-rT) ≈ Put + S, up to
    // Monte Carlo sampling error.
    let discount = (-inputs.rate * inputs.expiry as f64).exp();
    let call_side = call + inputs.strike * discount;
    let put_side = put + inputs.spot;

    println!("\n  test Put-call Parity:");
    println!("  Call + K*B(r,t) == {:.3}", call_side);
    println!("  Put  + S(t)     == {:.3}", put_side);
    println!();
}
