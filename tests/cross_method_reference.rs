//! Cross-checks between Monte Carlo, the explicit PDE solver, and the
//! closed-form Black-Scholes reference on a common market setup:
//! S0 = 100, K = 100, r = 0.05, sigma = 0.20, T = 1.

use pathwise::core::{OptionType, PricingError};
use pathwise::engines::analytic::black_scholes_price;
use pathwise::engines::{ExplicitFdEngine, MonteCarloEngine};
use pathwise::instruments::{AsianOption, ButterflyOption, CallSpread, EuropeanCall, EuropeanPut};
use pathwise::models::Gbm;

fn rel_err(x: f64, y: f64) -> f64 {
    (x - y).abs() / y.abs().max(1.0e-8)
}

fn reference_model() -> Gbm {
    Gbm::new(100.0, 50, 0.05, 0.20).unwrap()
}

fn reference_call() -> EuropeanCall {
    EuropeanCall::new(1.0, 0.05, 100.0)
}

#[test]
fn mc_call_converges_to_black_scholes() {
    let result = MonteCarloEngine::new(200_000, 42)
        .price(&reference_call(), &reference_model())
        .unwrap();

    let bs = black_scholes_price(OptionType::Call, 100.0, 100.0, 0.05, 0.20, 1.0);
    assert!((bs - 10.4506).abs() < 1e-3);
    assert!(
        (result.price - bs).abs() <= 4.0 * result.standard_error,
        "mc={} bs={} se={}",
        result.price,
        bs,
        result.standard_error
    );
}

#[test]
fn antithetic_error_beats_standard_error_on_a_monotone_payoff() {
    let call = reference_call();
    let model = reference_model();

    let standard = MonteCarloEngine::new(100_000, 42).price(&call, &model).unwrap();
    let antithetic = MonteCarloEngine::new(100_000, 42)
        .price_antithetic(&call, &model)
        .unwrap();

    assert!(
        antithetic.standard_error < standard.standard_error,
        "antithetic se {} should undercut standard se {}",
        antithetic.standard_error,
        standard.standard_error
    );
}

#[test]
fn antithetic_pairs_also_help_path_dependent_payoffs() {
    // Average-price payoffs read intermediate prices, which only stay
    // negatively correlated because the mirror path negates every step.
    let asian = AsianOption::new(1.0, 0.05, 100.0);
    let model = reference_model();

    let standard = MonteCarloEngine::new(60_000, 17).price(&asian, &model).unwrap();
    let antithetic = MonteCarloEngine::new(60_000, 17)
        .price_antithetic(&asian, &model)
        .unwrap();

    assert!(antithetic.standard_error < standard.standard_error);
}

#[test]
fn averaging_prices_below_the_vanilla_call() {
    let asian = AsianOption::new(1.0, 0.05, 100.0);
    let call = reference_call();
    let model = reference_model();

    let asian_price = MonteCarloEngine::new(100_000, 5)
        .price_antithetic(&asian, &model)
        .unwrap()
        .price;
    let call_price = MonteCarloEngine::new(100_000, 9)
        .price_antithetic(&call, &model)
        .unwrap()
        .price;

    assert!(asian_price < call_price);
}

#[test]
fn pde_call_matches_black_scholes_on_an_aligned_grid() {
    // dS = 1 puts S0 exactly on a node, leaving only the scheme error.
    let engine = ExplicitFdEngine::new(300.0, 300, 5_000);
    let price = engine.solve(&reference_call(), &reference_model()).unwrap();

    let bs = black_scholes_price(OptionType::Call, 100.0, 100.0, 0.05, 0.20, 1.0);
    assert!(rel_err(price, bs) < 0.01, "pde={price} bs={bs}");
}

#[test]
fn pde_call_stays_within_a_few_percent_on_a_coarse_grid() {
    // dS = 1.5: the nearest-node read-off lands on S = 100.5, so the
    // remaining gap is dominated by that snap.
    let engine = ExplicitFdEngine::new(300.0, 200, 2_000);
    let price = engine.solve(&reference_call(), &reference_model()).unwrap();

    let bs = black_scholes_price(OptionType::Call, 100.0, 100.0, 0.05, 0.20, 1.0);
    assert!(rel_err(price, bs) < 0.05, "pde={price} bs={bs}");
}

#[test]
fn pde_put_uses_its_discounted_strike_boundary() {
    let put = EuropeanPut::new(1.0, 0.05, 100.0);
    let engine = ExplicitFdEngine::new(300.0, 300, 5_000);
    let price = engine.solve(&put, &reference_model()).unwrap();

    let bs = black_scholes_price(OptionType::Put, 100.0, 100.0, 0.05, 0.20, 1.0);
    assert!(rel_err(price, bs) < 0.01, "pde={price} bs={bs}");
}

#[test]
fn pde_butterfly_matches_the_call_combination() {
    let fly = ButterflyOption::new(1.0, 0.05, 90.0, 100.0, 110.0);
    let engine = ExplicitFdEngine::new(300.0, 300, 5_000);
    let pde = engine.solve(&fly, &reference_model()).unwrap();

    let combo = black_scholes_price(OptionType::Call, 100.0, 90.0, 0.05, 0.20, 1.0)
        - 2.0 * black_scholes_price(OptionType::Call, 100.0, 100.0, 0.05, 0.20, 1.0)
        + black_scholes_price(OptionType::Call, 100.0, 110.0, 0.05, 0.20, 1.0);

    assert!((pde - combo).abs() < 0.1, "pde={pde} combo={combo}");

    let mc = MonteCarloEngine::new(200_000, 3)
        .price_antithetic(&fly, &reference_model())
        .unwrap();
    assert!((mc.price - combo).abs() <= 4.0 * mc.standard_error + 0.05);
}

#[test]
fn unstable_time_step_is_rejected_and_diverges_when_forced() {
    let call = reference_call();
    let model = reference_model();
    let bs = black_scholes_price(OptionType::Call, 100.0, 100.0, 0.05, 0.20, 1.0);

    // dt = 0.01 on dS = 1.5 sits far above the stability bound.
    let checked = ExplicitFdEngine::new(300.0, 200, 100);
    assert!(matches!(
        checked.solve(&call, &model),
        Err(PricingError::ConvergenceFailure(_))
    ));

    let unchecked = checked.with_enforce_stability(false);
    let price = unchecked.solve(&call, &model).unwrap();
    assert!(
        price.is_nan() || (price - bs).abs() > 1.0,
        "expected visible divergence, got {price}"
    );
}

#[test]
fn inverted_spread_fails_at_the_pricing_boundary() {
    let inverted = CallSpread::new(1.0, 0.05, 110.0, 90.0);
    let model = reference_model();

    let mc_err = MonteCarloEngine::new(10_000, 42)
        .price(&inverted, &model)
        .unwrap_err();
    assert!(matches!(mc_err, PricingError::InvalidInput(_)));

    let pde_err = ExplicitFdEngine::new(300.0, 200, 2_000)
        .solve(&inverted, &model)
        .unwrap_err();
    assert!(matches!(pde_err, PricingError::InvalidInput(_)));
}

#[test]
fn spread_price_sits_between_its_payoff_bounds() {
    let spread = CallSpread::new(1.0, 0.05, 95.0, 105.0);
    let result = MonteCarloEngine::new(100_000, 21)
        .price_antithetic(&spread, &reference_model())
        .unwrap();

    let df = (-0.05_f64).exp();
    assert!(result.price > 0.0);
    assert!(result.price < 10.0 * df);
}
